use crate::LaunchArgs;
use anyhow::Result;
use traffic_browser::{ChromeFinder, ChromeLauncher, ChromeShell, ProfileManager, ShellExit};
use traffic_core::Launcher;

/// Open the app window described by `args`
pub fn execute(args: LaunchArgs) -> Result<()> {
    let chrome_binary = ChromeFinder::new(args.chrome_path.clone()).find()?;
    tracing::info!("Using Chrome at {}", chrome_binary.display());

    let mut profile = select_profile(&args)?;

    let launcher = ChromeLauncher::new(chrome_binary, profile.path().to_path_buf())
        .with_debugging_port(args.port);
    let mut shell = ChromeShell::new(launcher);

    // The shell's window and page exist from here on, which is the point the
    // launch sequence is allowed to run
    Launcher::new().on_launch(&args, &mut shell)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async {
        // Ctrl+C while the DevTools retries run must still stop Chrome and
        // unwind, so the temporary profile gets cleaned up
        let interrupted = tokio::select! {
            presented = shell.present() => {
                presented?;
                false
            }
            _ = tokio::signal::ctrl_c() => true,
        };
        if interrupted {
            tracing::info!("Interrupted, stopping Chrome");
            shell.stop()?;
            return Ok(());
        }

        if args.no_wait {
            // Chrome keeps using the profile after we exit
            profile.retain();
            tracing::info!("Chrome left running");
            return Ok(());
        }

        match shell.wait_for_exit().await? {
            ShellExit::Closed(_) | ShellExit::NotRunning => {}
            ShellExit::Interrupted => tracing::info!("Stopped"),
        }

        Ok::<_, anyhow::Error>(())
    });

    // Don't hang on a blocking wait left behind by Ctrl+C
    runtime.shutdown_timeout(std::time::Duration::from_millis(100));

    result
}

fn select_profile(args: &LaunchArgs) -> Result<ProfileManager> {
    let profile = match (&args.profile, args.temp) {
        (Some(name), true) => {
            tracing::warn!("--temp overrides --profile {}", name);
            ProfileManager::temporary()?
        }
        (Some(name), false) => ProfileManager::named(name)?,
        (None, _) => ProfileManager::temporary()?,
    };

    if profile.is_temporary() {
        tracing::debug!("Using temporary profile {}", profile.path().display());
    } else {
        tracing::info!("Using profile {}", profile.path().display());
    }

    Ok(profile)
}
