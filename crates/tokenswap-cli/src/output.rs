use std::io::Write;

use crate::cli::OutputFormat;
use crate::commands::CommandOutput;
use crate::error::CliError;

pub fn render(output: &CommandOutput, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_output(&mut handle, output, format, pretty)
}

fn write_output<W: Write>(
    writer: &mut W,
    output: &CommandOutput,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => writeln!(writer, "{}", output.text)?,
        OutputFormat::Json => {
            if pretty {
                serde_json::to_writer_pretty(&mut *writer, &output.data)?;
            } else {
                serde_json::to_writer(&mut *writer, &output.data)?;
            }
            writeln!(writer)?;
        }
    }
    Ok(())
}
