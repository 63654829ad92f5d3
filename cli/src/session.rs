use error_stack::ResultExt;
use kernel::KernelError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::handler::AppModule;
use crate::request::Request;
use crate::route::route;

/// Answers every command read from `input` on `output`, one line each.
/// Lines that are not UTF-8 or not a known command are reported and skipped.
pub async fn run<R, W>(
    app: &AppModule,
    mut input: R,
    mut output: W,
) -> error_stack::Result<(), KernelError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        let read = input
            .read_until(b'\n', &mut buffer)
            .await
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| "Failed to read input")?;
        if read == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buffer) {
            Ok(line) => line,
            Err(error) => {
                tracing::warn!(%error, "skipping line that is not valid UTF-8");
                eprintln!("error: line is not valid UTF-8");
                continue;
            }
        };
        let request = match Request::parse_line(line) {
            Ok(Some(request)) => request,
            Ok(None) => continue,
            Err(error) => {
                tracing::warn!(%error, line = %line.trim(), "skipping malformed line");
                eprintln!("error: {}", error);
                continue;
            }
        };

        match route(app, request).await {
            Ok(answer) => {
                output
                    .write_all(format!("{}\n", answer).as_bytes())
                    .await
                    .change_context_lazy(|| KernelError::Internal)
                    .attach_printable_lazy(|| "Failed to write output")?;
            }
            Err(report) if matches!(report.current_context(), KernelError::Timeout) => {
                tracing::error!(?report, "request timed out");
                eprintln!("error: request timed out");
            }
            Err(report) => return Err(report),
        }
    }

    output
        .flush()
        .await
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| "Failed to flush output")
}
