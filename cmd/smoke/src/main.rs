//! Smoke test for the outcome crate's public API.
//!
//! Walks every primitive once: construction, queries, combinators, the
//! boxed specialization, enum spans, and tagged arguments.
//!
//! Run with: `cargo run -p outcome-smoke`

use outcome::{
    ensure, err_at, impl_contiguous, BoxedOutcome, EnumSpan, Fallible, Outcome, Tagged,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Parse,
    Validate,
    Apply,
}
impl_contiguous!(Phase { Parse, Validate, Apply });

struct PortTag;
struct RetriesTag;
type Port = Tagged<PortTag, u16>;
type Retries = Tagged<RetriesTag, u16>;

fn parse_port(raw: &str) -> Fallible<u16> {
    ensure!(!raw.is_empty(), "empty port string");
    match raw.parse() {
        Ok(port) => Outcome::Ok(port),
        Err(_) => Outcome::Err(err_at!("bad port: {:?}", raw)),
    }
}

fn connect(port: Port, retries: Retries) -> Fallible<String> {
    ensure!(*port.get() != 0, "port 0 is not connectable");
    Outcome::Ok(format!(
        "connected to :{} after {} retries",
        port.get(),
        retries.get()
    ))
}

fn main() {
    println!("=== outcome smoke ===\n");

    // Ok path, combinators.
    let port = parse_port("8080").map(|p| p + 1);
    println!("parse_port(\"8080\") + 1 -> ok={:?}", port.ok());

    // Err path: err() is safe without checking first, and info() carries
    // the captured call site.
    let bad = parse_port("eighty");
    if let Some(e) = bad.err() {
        println!("\nparse_port(\"eighty\") failed:\n{}", e.info());
    }

    // Relabeling during propagation keeps the original diagnostic text.
    let relabeled = parse_port("").map_err(|mut e| {
        e.set("config stage: empty port string");
        e
    });
    if let Some(e) = relabeled.err() {
        println!("\nrelabeled msg : {}", e.msg());
        println!("stale info    : {}", e.info().lines().next().unwrap_or(""));
    }

    // Boxed specialization: ok() duplicates the pointee, the original
    // stays live.
    let boxed: BoxedOutcome<Vec<u8>, outcome::Error> = BoxedOutcome::Ok(Box::new(vec![1, 2, 3]));
    let copy = boxed.ok();
    println!(
        "\nboxed ok() copy={:?}, original still ok={}",
        copy,
        boxed.is_ok()
    );

    // Enum spans and tagged arguments.
    let phases: Vec<Phase> = EnumSpan::all().collect();
    println!("\nphases in order: {:?}", phases);

    match connect(Port::new(443), Retries::new(3)) {
        Outcome::Ok(report) => println!("{}", report),
        Outcome::Err(e) => println!("connect failed: {}", e.info()),
    }

    println!("\n=== done ===");
}
