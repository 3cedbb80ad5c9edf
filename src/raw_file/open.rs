use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Read, Write},
    path::Path,
};

use super::{scan, Backing, MsgSpan, RawBufrFile};

use crate::{errors::BufrRawErr, mode::OpenMode};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

impl RawBufrFile {
    /// Open a raw BUFR message file.
    ///
    /// `Read` loads the whole file into memory and scans it once for
    /// message boundaries; gzip compressed files are decompressed
    /// transparently first. A non-empty file yielding no messages opens
    /// with a count of zero and a logged warning rather than an error.
    ///
    /// `Write` refuses to truncate an existing file, the caller must
    /// remove it or open for appending instead. `Append` positions at the
    /// end of the file, creating it when absent, and does not scan prior
    /// content.
    pub fn open(path: &dyn AsRef<Path>, mode: OpenMode) -> Result<Self, BufrRawErr> {
        let path = path.as_ref().to_path_buf();

        let backing = match mode {
            OpenMode::Read => {
                if !path.exists() {
                    return Err(BufrRawErr::FileNotFound(path));
                }

                let raw = std::fs::read(&path)?;
                let data = if raw.starts_with(&GZIP_MAGIC) {
                    let mut decoder = flate2::read::GzDecoder::new(&raw[..]);
                    let mut buf = Vec::new();
                    decoder.read_to_end(&mut buf)?;
                    buf
                } else {
                    raw
                };

                let index = scan::scan_msgs(&data);
                if index.is_empty() && !data.is_empty() {
                    log::warn!("no messages found in {}", path.display());
                }

                Backing::Reader {
                    data,
                    index,
                    cursor: 0,
                }
            }
            OpenMode::Write => {
                if path.exists() {
                    return Err(BufrRawErr::FileExists(path));
                }

                let file = File::create(&path)?;
                Backing::Writer {
                    sink: BufWriter::new(file),
                    num_written: 0,
                }
            }
            OpenMode::Append => {
                let file = OpenOptions::new().append(true).create(true).open(&path)?;
                Backing::Writer {
                    sink: BufWriter::new(file),
                    num_written: 0,
                }
            }
        };

        Ok(RawBufrFile {
            path,
            mode,
            backing,
        })
    }

    /// Flush and release the underlying buffer or stream.
    ///
    /// Safe to call more than once; anything after the first successful
    /// close fails with [`BufrRawErr::FileClosed`].
    pub fn close(&mut self) -> Result<(), BufrRawErr> {
        match std::mem::replace(&mut self.backing, Backing::Closed) {
            Backing::Writer { mut sink, .. } => {
                sink.flush()?;
                Ok(())
            }
            Backing::Reader { .. } | Backing::Closed => Ok(()),
        }
    }

    /// The path this file was opened with.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The mode this file was opened in.
    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    /// The offset index built by the open scan. Read mode only.
    pub fn index(&self) -> Result<&[MsgSpan], BufrRawErr> {
        match &self.backing {
            Backing::Reader { index, .. } => Ok(index),
            Backing::Writer { .. } => Err(BufrRawErr::WrongMode("index", self.mode)),
            Backing::Closed => Err(BufrRawErr::FileClosed),
        }
    }

    /// How many indexed messages were flagged as truncated by the scan.
    pub fn num_corrupted_msgs(&self) -> Result<usize, BufrRawErr> {
        Ok(self.index()?.iter().filter(|span| span.truncated).count())
    }

    /// Dump mode, path, and the message index to the console.
    pub fn print_properties(&self, prefix: &str) {
        println!("{}: path = {}", prefix, self.path.display());
        println!("{}: mode = {}", prefix, self.mode);

        match &self.backing {
            Backing::Reader { index, cursor, .. } => {
                println!(
                    "{}: holds {} messages, next sequential read is msg {}",
                    prefix,
                    index.len(),
                    cursor + 1
                );
                for (i, span) in index.iter().enumerate() {
                    println!(
                        "{}: msg {:3}: bytes {}..{}{}",
                        prefix,
                        i + 1,
                        span.start,
                        span.end,
                        if span.truncated { " (truncated)" } else { "" }
                    );
                }
            }
            Backing::Writer { num_written, .. } => {
                println!("{}: {} messages written", prefix, num_written);
            }
            Backing::Closed => println!("{}: closed", prefix),
        }
    }
}

impl Drop for RawBufrFile {
    // Flush anything a writer still buffers, so the stream is released
    // cleanly on every exit path.
    fn drop(&mut self) {
        if let Backing::Writer { sink, .. } = &mut self.backing {
            let _ = sink.flush();
        }
    }
}
