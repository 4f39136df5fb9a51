// Runs in its own process so the lazy static starts uninitialised.

use design_patterns::creational::singleton::{self, JustSingleton};

#[test]
fn repeated_runs_greet_once_per_initialization() {
    let mut out = Vec::new();
    singleton::run(&mut out).unwrap();
    singleton::run(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(JustSingleton::initializations(), 1);
    assert_eq!(
        text.matches("This is just singleton").count(),
        JustSingleton::initializations()
    );
    assert_eq!(text.matches("what just happened?").count(), 4);
    assert_eq!(text.matches("Hello CO-WOODZ").count(), 2);
}
