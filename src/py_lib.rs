use crate::{errors::BufrRawErr, mode::OpenMode, raw_file::RawBufrFile};
use pyo3::{exceptions, prelude::*, types::PyBytes, wrap_pyfunction};
use std::str::FromStr;
use strum::IntoEnumIterator;

#[pymethods]
impl RawBufrFile {
    #[new]
    fn open_with_mode(path: String, mode: &str) -> PyResult<Self> {
        let mode = OpenMode::from_str(mode).map_err(BufrRawErr::from)?;
        Ok(RawBufrFile::open(&path, mode)?)
    }

    #[getter]
    fn get_path(&self) -> PyResult<String> {
        Ok(self
            .path()
            .to_str()
            .map(String::from)
            .ok_or(BufrRawErr::LogicError(
                "unable to convert path to string",
            ))?)
    }

    #[getter]
    fn get_mode(&self) -> PyResult<&'static str> {
        Ok(self.mode().as_static_str())
    }

    fn get_num_msgs(&self) -> PyResult<usize> {
        Ok(self.num_msgs()?)
    }

    fn get_num_corrupted_msgs(&self) -> PyResult<usize> {
        Ok(self.num_corrupted_msgs()?)
    }

    fn get_next_raw_msg(&mut self, py: Python) -> PyResult<PyObject> {
        match self.next_raw_msg()? {
            Some(msg) => Ok(PyBytes::new(py, msg.as_bytes()).into()),
            None => Ok(py.None()),
        }
    }

    fn get_raw_msg(&self, py: Python, msg_num: usize) -> PyResult<PyObject> {
        let msg = self.raw_msg(msg_num)?;
        Ok(PyBytes::new(py, msg.as_bytes()).into())
    }

    fn write_raw_bufr_msg(&mut self, msg: Vec<u8>) -> PyResult<()> {
        Ok(self.write_raw_msg(&msg)?)
    }

    #[name = "close"]
    fn py_close(&mut self) -> PyResult<()> {
        Ok(self.close()?)
    }

    #[name = "print_properties"]
    fn py_print_properties(&self, prefix: &str) -> PyResult<()> {
        self.print_properties(prefix);
        Ok(())
    }
}

#[pyfunction]
fn all_modes() -> Vec<String> {
    OpenMode::iter()
        .map(|mode| mode.as_static_str().to_owned())
        .collect()
}

/// Read, split, and write files of raw BUFR messages.
#[pymodule]
fn bufr_raw(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<RawBufrFile>()?;
    m.add_wrapped(wrap_pyfunction!(all_modes))?;

    Ok(())
}

impl std::convert::From<BufrRawErr> for PyErr {
    fn from(err: BufrRawErr) -> PyErr {
        use crate::errors::BufrRawErr::*;

        match err {
            FileNotFound(_) => exceptions::FileNotFoundError::py_err(err.to_string()),
            FileExists(_) => exceptions::FileExistsError::py_err(err.to_string()),
            MsgOutOfRange(..) => exceptions::IndexError::py_err(err.to_string()),
            _ => exceptions::Exception::py_err(err.to_string()),
        }
    }
}
