//! Diagnostic tracing for cold interop paths.
//!
//! Controlled by the `IL2CPP_RS_TRACE` environment variable: `"1"`, `"true"`
//! or `"stdout"` write to stdout, `"stderr"` to stderr, anything else is
//! treated as a file path. Unset means tracing is off and every trace site
//! reduces to one load of an initialized-once cell.
//!
//! Only library loading, symbol resolution, and field resolution trace; the
//! field access fast path never goes through here.

use std::{
    env,
    fmt::Arguments,
    fs::File,
    io::{stderr, stdout, Write},
    sync::{Mutex, OnceLock},
};

static SINK: OnceLock<Option<Mutex<Box<dyn Write + Send>>>> = OnceLock::new();

fn sink() -> Option<&'static Mutex<Box<dyn Write + Send>>> {
    SINK.get_or_init(|| {
        let target = env::var("IL2CPP_RS_TRACE").ok()?;
        let writer: Box<dyn Write + Send> = match target.as_str() {
            "1" | "true" | "stdout" => Box::new(stdout()),
            "stderr" => Box::new(stderr()),
            path => Box::new(File::create(path).ok()?),
        };
        Some(Mutex::new(writer))
    })
    .as_ref()
}

pub(crate) fn msg(args: Arguments<'_>) {
    if let Some(out) = sink() {
        let mut out = out.lock().unwrap();
        let _ = writeln!(out, "[il2cpp-rs] {args}");
        let _ = out.flush();
    }
}

macro_rules! trace_msg {
    ($($format:tt)*) => {
        $crate::trace::msg(format_args!($($format)*))
    };
}
