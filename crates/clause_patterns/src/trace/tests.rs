use super::*;
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

/// Serializes tests that flip the process-wide toggle.
static TOGGLE: Mutex<()> = parking_lot::const_mutex(());

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

fn traced_output(run: impl FnOnce()) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::with_default(subscriber, run);
    capture.text()
}

#[test]
fn enabled_trace_emits_before_and_after_lines() {
    let _guard = TOGGLE.lock();
    let pattern = Pattern::value(1);
    let output = traced_output(|| {
        set_trace(true);
        let results = pattern.match_value(&Value::int(1));
        assert!(results[0].matched);
        set_trace(false);
    });

    assert!(output.contains("[Match value] args: 1"), "{output}");
    assert!(output.contains("[Match value] --> [<<1 = 1>>]"), "{output}");
}

#[test]
fn tracing_does_not_change_results() {
    let _guard = TOGGLE.lock();
    let pattern = Pattern::args(Pattern::mapping([("a", Pattern::var("b"))]));
    let subject = Value::map([("a", Value::int(3))]);

    let plain = pattern.match_value(&subject);
    let mut traced = Vec::new();
    let _ = traced_output(|| {
        set_trace(true);
        traced = pattern.match_value(&subject);
        set_trace(false);
    });

    assert_eq!(plain, traced);
}

#[test]
fn capture_traces_the_argument_group() {
    let _guard = TOGGLE.lock();
    let pattern = Pattern::args(Pattern::tuple([Pattern::var("x")]));
    let subject = Value::tuple(vec![Value::int(5)]);
    let mut env = None;
    let output = traced_output(|| {
        set_trace(true);
        env = pattern.capture(&subject);
        set_trace(false);
    });

    assert_eq!(
        env.and_then(|e| e.lookup("x").cloned()),
        Some(Value::int(5))
    );
    assert!(output.contains("[Match arg] args: (5,)"), "{output}");
    assert!(
        output.contains("[Match arg] --> [<<args(($x,)) = Env(x: 5)>>]"),
        "{output}"
    );
    assert!(output.contains("[Match var] args: 5"), "{output}");
}

#[test]
fn result_list_renders_each_result() {
    let pattern = Pattern::var("x");
    let results = vec![MatchResult::subject(true, &pattern, &Value::int(2))];
    assert_eq!(ResultList(&results).to_string(), "[<<$x = 2>>]");
}
