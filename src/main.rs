mod dcinside;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::{debug, error};
use tracing_subscriber::{fmt, EnvFilter};

use crate::dcinside::{AnonymousSession, AppIdFetcher, AuthConfig, DcInsideAuth, FetchError};

#[derive(Debug, Parser)]
#[command(
    name = "appid-generator",
    about = "Prints a freshly issued DCInside app ID",
    version,
    long_about = None
)]
struct Cli {
    /// Log more to stderr (-v for info, -vv for debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_tracing(args.verbose);

    // Anonymous posters don't need a real nickname or password.
    let session = AnonymousSession::new();

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let printed = match DcInsideAuth::new(AuthConfig::default()) {
        Ok(auth) => run(&auth, session, &mut stdout, &mut stderr),
        Err(error) => report_failure(&error, &mut stderr),
    };

    if printed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Fetches a single app ID, writing it to `stdout` as-is.
/// On failure, only the error line is written to `stderr`.
///
/// Returns whether an app ID was printed.
fn run<F: AppIdFetcher>(
    fetcher: &F,
    session: AnonymousSession,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> bool {
    match fetcher.fetch_app_id(session) {
        Ok(app_id) => {
            if let Err(err) = write!(stdout, "{app_id}").and_then(|()| stdout.flush()) {
                error!(%err, "unable to write app ID to stdout");
                return false;
            }
            true
        }
        Err(error) => report_failure(&error, stderr),
    }
}

fn report_failure(error: &FetchError, stderr: &mut impl Write) -> bool {
    debug!(?error, "unable to obtain app ID");
    // Nothing sensible remains to be done if stderr is gone too.
    let _ = writeln!(stderr, "Error getting app_id: {error}");
    false
}

/// Logs go to stderr so that stdout only ever holds the app ID.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Err(err) = fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init()
    {
        eprintln!("unable to initialize logging: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dcinside::AppId;
    use std::cell::{Cell, RefCell};

    /// Hands out a canned result, recording every session it was given.
    struct StubFetcher {
        result: fn() -> Result<AppId, FetchError>,
        calls: Cell<u32>,
        sessions: RefCell<Vec<AnonymousSession>>,
    }

    impl StubFetcher {
        fn new(result: fn() -> Result<AppId, FetchError>) -> Self {
            Self {
                result,
                calls: Cell::new(0),
                sessions: RefCell::new(Vec::new()),
            }
        }
    }

    impl AppIdFetcher for StubFetcher {
        fn fetch_app_id(&self, session: AnonymousSession) -> Result<AppId, FetchError> {
            self.calls.set(self.calls.get() + 1);
            self.sessions.borrow_mut().push(session);
            (self.result)()
        }
    }

    fn run_with(fetcher: &StubFetcher) -> (bool, String, String) {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let printed = run(fetcher, AnonymousSession::new(), &mut stdout, &mut stderr);
        (
            printed,
            String::from_utf8(stdout).unwrap(),
            String::from_utf8(stderr).unwrap(),
        )
    }

    #[test]
    fn prints_app_id_verbatim() {
        let fetcher = StubFetcher::new(|| Ok(AppId::from("abc123")));
        let (printed, stdout, stderr) = run_with(&fetcher);

        assert!(printed);
        assert_eq!(stdout, "abc123");
        assert!(stderr.is_empty());
    }

    #[test]
    fn reports_failure_on_stderr_only() {
        let fetcher = StubFetcher::new(|| Err(FetchError::Rejected("timeout".to_string())));
        let (printed, stdout, stderr) = run_with(&fetcher);

        assert!(!printed);
        assert!(stdout.is_empty());
        assert!(stderr.contains("Error getting app_id: timeout"));
        assert_eq!(stderr.lines().count(), 1);
    }

    #[test]
    fn fetches_exactly_once_even_on_failure() {
        let failing = StubFetcher::new(|| Err(FetchError::MissingAppId));
        run_with(&failing);
        assert_eq!(failing.calls.get(), 1);

        let succeeding = StubFetcher::new(|| Ok(AppId::from("abc123")));
        run_with(&succeeding);
        assert_eq!(succeeding.calls.get(), 1);
    }

    #[test]
    fn passes_placeholder_session_through() {
        let fetcher = StubFetcher::new(|| Ok(AppId::from("abc123")));
        run_with(&fetcher);

        let sessions = fetcher.sessions.borrow();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].nickname, "ㅇㅇ");
        assert_eq!(sessions[0].password, "1234");
    }

    #[test]
    fn verbosity_flag_counts() {
        let args = Cli::try_parse_from(["appid-generator", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);

        let args = Cli::try_parse_from(["appid-generator"]).unwrap();
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn rejects_unknown_arguments() {
        assert!(Cli::try_parse_from(["appid-generator", "--board", "stock"]).is_err());
    }
}
