//! Opened output destinations
//!
//! A [`Sink`] is one opened [`Destination`]. It plugs into the backend as a
//! `MakeWriter`; a [`SinkSet`] tees several sinks into one writer with the
//! backend's own `MakeWriterExt::and`.

use crate::errors::{LogError, Result};
use simplelogger_types::Destination;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Arc;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriter, MakeWriterExt};

/// An opened destination
#[derive(Debug, Clone)]
pub enum Sink {
    Stderr,
    Stdout,
    File { destination: String, file: Arc<File> },
}

impl Sink {
    /// Open a destination; files are created if missing and appended to
    pub fn open(destination: &Destination) -> Result<Self> {
        match destination {
            Destination::Stderr => Ok(Sink::Stderr),
            Destination::Stdout => Ok(Sink::Stdout),
            Destination::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|source| LogError::OpenDestination {
                        destination: destination.to_string(),
                        source,
                    })?;
                Ok(Sink::File {
                    destination: destination.to_string(),
                    file: Arc::new(file),
                })
            }
        }
    }

    /// Destination name as configured
    pub fn name(&self) -> String {
        match self {
            Sink::Stderr => Destination::Stderr.to_string(),
            Sink::Stdout => Destination::Stdout.to_string(),
            Sink::File { destination, .. } => destination.clone(),
        }
    }

    /// Flush buffered writes; files are also synced to disk
    pub fn sync(&self) -> Result<()> {
        let result = match self {
            Sink::Stderr => io::stderr().flush(),
            Sink::Stdout => io::stdout().flush(),
            Sink::File { file, .. } => {
                let mut handle: &File = file;
                handle.flush().and_then(|()| handle.sync_all())
            }
        };
        result.map_err(|source| LogError::Sync {
            destination: self.name(),
            source,
        })
    }
}

/// Writer handed out per event
pub enum SinkWriter<'a> {
    Stderr(io::Stderr),
    Stdout(io::Stdout),
    File(&'a File),
}

impl Write for SinkWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            SinkWriter::Stderr(w) => w.write(buf),
            SinkWriter::Stdout(w) => w.write(buf),
            SinkWriter::File(w) => w.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            SinkWriter::Stderr(w) => w.write_all(buf),
            SinkWriter::Stdout(w) => w.write_all(buf),
            SinkWriter::File(w) => w.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            SinkWriter::Stderr(w) => w.flush(),
            SinkWriter::Stdout(w) => w.flush(),
            SinkWriter::File(w) => w.flush(),
        }
    }
}

impl<'a> MakeWriter<'a> for Sink {
    type Writer = SinkWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        match self {
            Sink::Stderr => SinkWriter::Stderr(io::stderr()),
            Sink::Stdout => SinkWriter::Stdout(io::stdout()),
            Sink::File { file, .. } => SinkWriter::File(file),
        }
    }
}

/// A non-empty list of opened sinks
#[derive(Debug, Clone)]
pub struct SinkSet {
    sinks: Vec<Sink>,
}

impl SinkSet {
    /// Open every destination in `paths`
    ///
    /// Fails on the first destination that cannot be opened, or when `paths`
    /// is empty.
    pub fn open(paths: &[String]) -> Result<Self> {
        if paths.is_empty() {
            return Err(LogError::NoDestinations);
        }
        let sinks = paths
            .iter()
            .map(|path| Sink::open(&Destination::parse(path)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { sinks })
    }

    pub fn sinks(&self) -> &[Sink] {
        &self.sinks
    }

    /// A single writer that fans out to every sink
    pub fn make_writer(&self) -> BoxMakeWriter {
        let mut sinks = self.sinks.iter().cloned();
        let Some(first) = sinks.next() else {
            return BoxMakeWriter::new(io::sink);
        };
        sinks.fold(BoxMakeWriter::new(first), |tee, next| {
            BoxMakeWriter::new(tee.and(next))
        })
    }

    /// Sync every sink, returning the first failure
    pub fn sync(&self) -> Result<()> {
        let mut first_err = None;
        for sink in &self.sinks {
            if let Err(err) = sink.sync() {
                first_err.get_or_insert(err);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    /// Write one line directly to every sink, bypassing the backend
    pub fn write_line(&self, line: &str) {
        for sink in &self.sinks {
            let _ = writeln!(sink.make_writer(), "{}", line);
        }
    }
}
