use crate::io::error::Error;
use crate::plot::{PlotDocument, python};
use std::io::Write;

pub fn write<W: Write>(mut writer: W, doc: &PlotDocument) -> Result<(), Error> {
    writer.write_all(python::render(doc).as_bytes())?;
    writer.flush()?;
    Ok(())
}
