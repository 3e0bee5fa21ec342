use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use cursor_align::{
    AlignEngine, AlignOptions, BlockPolicy, Position, Selection, TextBuffer, align_cursors,
};

fn assignments(line_count: usize) -> (String, Vec<Selection>) {
    let mut out = String::with_capacity(line_count * 48);
    let mut selections = Vec::with_capacity(line_count * 2);
    for i in 0..line_count {
        let name = "x".repeat(1 + i % 17);
        let line = format!("\t{name} = {i}, // value\t= {}", i * 3);
        for (col, ch) in line.chars().enumerate() {
            if ch == '=' {
                selections.push(Selection::caret(Position::new(i, col)));
            }
        }
        out.push_str(&line);
        out.push('\n');
    }
    // Remove the final '\n' to avoid creating an extra trailing empty line.
    out.pop();
    (out, selections)
}

fn bench_plan(c: &mut Criterion) {
    let (text, selections) = assignments(20_000);
    let buffer = TextBuffer::new(&text).with_selections(selections);

    for (name, policy) in [
        ("plan/multi_cursor_20k_lines", BlockPolicy::MultiCursor),
        ("plan/merge_20k_lines", BlockPolicy::Merge),
    ] {
        let engine = AlignEngine::new(AlignOptions::default().with_block_policy(policy));
        c.bench_function(name, |b| {
            b.iter(|| black_box(engine.plan(black_box(&buffer)).inserts.len()))
        });
    }
}

fn bench_align_in_place(c: &mut Criterion) {
    let (text, selections) = assignments(5_000);
    c.bench_function("align/5k_lines", |b| {
        b.iter_batched(
            || TextBuffer::new(&text).with_selections(selections.clone()),
            |mut buffer| {
                align_cursors(&mut buffer).unwrap();
                black_box(buffer.revision());
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_plan, bench_align_in_place);
criterion_main!(benches);
