//! Console rendering of what checkout emits.

use crate::config::OutputFormat;
use cart_core::{CartError, Receipt, ReceiptSink, ShipmentNotice};
use std::fmt::Display;
use std::io::{self, Write};
use tracing::warn;

/// Writes shipment notices, receipts and `NOTE:` lines to a writer.
///
/// Sink callbacks cannot fail, so the first write error is kept and
/// returned from [`ConsoleSink::finish`].
pub struct ConsoleSink<W: Write> {
    out: W,
    format: OutputFormat,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            error: None,
        }
    }

    /// Report a rejected operation the way the shopper sees it
    pub fn note(&mut self, err: &CartError) {
        self.line(format_args!("NOTE: {err}"));
    }

    /// Section heading between scenarios
    pub fn heading(&mut self, title: impl Display) {
        self.line(format_args!("=== {title} ==="));
    }

    /// Flush and hand back the writer, or the first write error
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn line(&mut self, text: impl Display) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{text}") {
            warn!(error = %err, "console write failed");
            self.error = Some(err);
        }
    }
}

impl<W: Write> ReceiptSink for ConsoleSink<W> {
    fn on_shipment(&mut self, notice: &ShipmentNotice) {
        match self.format {
            OutputFormat::Text => self.line(notice),
            OutputFormat::Json => match notice.to_json() {
                Ok(json) => self.line(json),
                Err(err) => self.note(&err),
            },
        }
    }

    fn on_receipt(&mut self, receipt: &Receipt) {
        match self.format {
            OutputFormat::Text => self.line(receipt),
            OutputFormat::Json => match receipt.to_json() {
                Ok(json) => self.line(json),
                Err(err) => self.note(&err),
            },
        }
    }
}
