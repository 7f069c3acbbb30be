//! Process-wide logger initialization.
//!
//! Kept in its own test binary so no other test touches the global.

use std::fs;
use std::sync::{Arc, Barrier};
use std::thread;

use gobike_server::logger::{Level, Logger};

#[test]
fn test_first_initializer_wins() {
    let tmp = tempfile::tempdir().unwrap();

    // A failed first attempt leaves the slot empty.
    let blocker = tmp.path().join("blocked");
    fs::write(&blocker, b"file").unwrap();
    assert!(Logger::init(&blocker, Level::Info).is_err());
    assert!(Logger::global().is_none());

    let dir_a = tmp.path().join("a");
    let dir_b = tmp.path().join("b");
    let barrier = Arc::new(Barrier::new(2));

    let spawn = |dir: std::path::PathBuf, level: Level| {
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            Logger::init(dir, level).unwrap()
        })
    };
    let ta = spawn(dir_a.clone(), Level::Info);
    let tb = spawn(dir_b.clone(), Level::Error);
    let a = ta.join().unwrap();
    let b = tb.join().unwrap();

    assert!(Arc::ptr_eq(&a, &b));

    let config = (a.path().to_path_buf(), a.level());
    let abs_a = std::path::absolute(&dir_a).unwrap();
    let abs_b = std::path::absolute(&dir_b).unwrap();
    assert!(
        config == (abs_a.clone(), Level::Info) || config == (abs_b.clone(), Level::Error),
        "unexpected configuration {:?}",
        config
    );
    // Only the winner's directory was created.
    assert_ne!(abs_a.exists(), abs_b.exists());

    // Later calls ignore their arguments.
    let late = Logger::init(tmp.path().join("c"), Level::Trace).unwrap();
    assert!(Arc::ptr_eq(&a, &late));
    assert!(!tmp.path().join("c").exists());

    let global = Logger::global().unwrap();
    assert!(Arc::ptr_eq(&a, &global));
}
