use std::path::PathBuf;
use std::sync::mpsc::{Receiver, channel};

/// Watches the terrain input files and signals on any change.
///
/// The watcher lives on its own thread for the rest of the process.
pub fn spawn_terrain_watcher(paths: Vec<PathBuf>) -> Receiver<()> {
    let (tx, rx) = channel::<()>();
    std::thread::spawn(move || {
        use notify::{EventKind, RecursiveMode, Watcher};
        let mut watcher =
            match notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
                if let Ok(event) = res {
                    match event.kind {
                        EventKind::Modify(_)
                        | EventKind::Create(_)
                        | EventKind::Remove(_)
                        | EventKind::Any => {
                            let _ = tx.send(());
                        }
                        _ => {}
                    }
                }
            }) {
                Ok(w) => w,
                Err(e) => {
                    log::warn!("file watcher unavailable: {}", e);
                    return;
                }
            };
        for p in &paths {
            match watcher.watch(p.as_path(), RecursiveMode::NonRecursive) {
                Ok(()) => log::debug!("watching {}", p.display()),
                Err(e) => log::warn!("cannot watch {}: {}", p.display(), e),
            }
        }
        loop {
            std::thread::sleep(std::time::Duration::from_secs(3600));
        }
    });
    rx
}
