//! Benchmarks for JSON-RPC envelope dispatch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mcp_lab::{Dispatcher, McpHandler};

const LIST_TOOLS: &str = r#"{"jsonrpc":"2.0","id":"1","method":"tools/list","params":{}}"#;
const MALFORMED: &str = r#"{"jsonrpc":"2.0","method":"#;

fn bench_list_tools(c: &mut Criterion) {
    let dispatcher = Dispatcher::default();

    let mut group = c.benchmark_group("tools_list");
    group.throughput(Throughput::Elements(1));
    group.bench_function("dispatch", |b| {
        b.iter(|| dispatcher.handle_raw(black_box(LIST_TOOLS.as_bytes())))
    });
    group.finish();
}

fn bench_call_tool(c: &mut Criterion) {
    let dispatcher = Dispatcher::default();

    let mut group = c.benchmark_group("tools_call");
    group.throughput(Throughput::Elements(1));

    for query_len in [4, 64, 1024] {
        let query = "q".repeat(query_len);
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": {"name": "google_search", "arguments": {"query": query}}
        })
        .to_string();

        group.bench_with_input(
            BenchmarkId::new("google_search", query_len),
            &body,
            |b, body| b.iter(|| dispatcher.handle_raw(black_box(body.as_bytes()))),
        );
    }

    group.finish();
}

fn bench_parse_error(c: &mut Criterion) {
    let dispatcher = Dispatcher::default();

    c.bench_function("parse_error", |b| {
        b.iter(|| dispatcher.handle_raw(black_box(MALFORMED.as_bytes())))
    });
}

criterion_group!(benches, bench_list_tools, bench_call_tool, bench_parse_error);
criterion_main!(benches);
