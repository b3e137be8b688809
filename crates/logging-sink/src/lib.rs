#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the output side of the lima logger: a single text
//! stream that receives fully composed log lines. The logger decides *what* to
//! print and whether to print it; a [`LineSink`] only decides *where* the bytes
//! go.
//!
//! # Design
//!
//! [`LineSink`] is a small object-safe trait so a logger can hold an
//! `Arc<dyn LineSink>` and share it between clones and threads. Two
//! implementations are provided:
//!
//! - [`StdoutSink`] streams to the process's standard output and is what every
//!   logger uses unless told otherwise.
//! - [`WriterSink`] owns an arbitrary [`std::io::Write`] implementor behind a
//!   mutex. Embedders use it to redirect output; tests use
//!   `WriterSink<Vec<u8>>` to capture lines and inspect them afterwards.
//!
//! # Invariants
//!
//! - Each call to [`LineSink::write_line`] hands the whole line to the writer in
//!   a single `write_all`, so prefix, body and suffix are never observable as
//!   separate writes.
//! - Sinks never append or strip characters. Newlines and colour codes are the
//!   logger's responsibility.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer. Lock poisoning is recovered rather than reported.
//!
//! # Examples
//!
//! Capture two lines into an in-memory buffer:
//!
//! ```
//! use logging_sink::{LineSink, WriterSink};
//!
//! let sink = WriterSink::new(Vec::new());
//! sink.write_line("[Info] ready\n")?;
//! sink.write_line("[Warning] low disk\n")?;
//!
//! assert_eq!(sink.lines(), vec!["[Info] ready", "[Warning] low disk"]);
//! # Ok::<(), std::io::Error>(())
//! ```

mod sink;

pub use sink::{LineSink, StdoutSink, WriterSink};
