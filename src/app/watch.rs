// License: MIT

use eyre::{Result, WrapErr};
use tokio::sync::mpsc;

use crate::cli::Args;
use crate::core::{events::Event, session::Session, timer::BuildTimer};
use crate::host::sink::{OutputSink, StdoutSink};
use crate::{bdebug, berror, binfo, bwarn};

pub async fn run(args: Args) -> Result<()> {
    crate::log::set_verbose(args.verbose);

    if let Some(path) = args.log_file {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("could not create log directory for {}", path.display()))?;
        }
        crate::log::set_log_file(path);
    }

    binfo!("Buildtimer", "starting (pid={})", std::process::id());

    let timer = BuildTimer::new();
    let mut session = Session::new();
    let mut sink = StdoutSink::new();

    let (tx, mut rx) = mpsc::channel::<Event>(256);
    let source = tokio::spawn(crate::host::source::run_stdin_source(tx));

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                binfo!("Buildtimer", "received Ctrl+C, shutting down");
                break;
            }

            maybe = rx.recv() => {
                let Some(event) = maybe else {
                    bdebug!("Buildtimer", "event source detached");
                    break;
                };

                bdebug!("Buildtimer", "incoming at {}ms: {:?}", event.now_ms(), event);

                for report in timer.handle_event(&mut session, event) {
                    if let Err(e) = sink.write_line(&report.render()) {
                        berror!("Buildtimer", "report write failed: {e}");
                    }
                }
            }
        }
    }

    // Detach first so no late event is handled after shutdown.
    drop(rx);
    source.abort();

    if session.timing() {
        bwarn!(
            "Buildtimer",
            "a solution build was still open at shutdown and never reported completion"
        );
    }

    binfo!(
        "Buildtimer",
        "timed {} solution build(s)",
        session.builds_timed()
    );

    Ok(())
}
