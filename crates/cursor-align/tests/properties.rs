//! Alignment properties over generated input.
//!
//! 1. Idempotence: aligning the output of an alignment inserts nothing.
//! 2. Widths: after alignment every block matches its column's padding and content width.
//! 3. Only spaces are ever inserted; no existing character is removed or moved out of order.

use cursor_align::{
    AlignEngine, AlignOptions, AlignOutcome, BlockPolicy, CodePointSpan, LineText, Position,
    Selection, TextBuffer, TextSource, build_blocks, resolve_columns,
};
use rand::Rng;

const ALPHABET: &[char] = &['a', 'b', ' ', '=', '\t', '🦀', ','];

fn random_line(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(0..12);
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

fn random_selections(rng: &mut impl Rng, lines: &[String]) -> Vec<Selection> {
    let mut selections = Vec::new();
    for (line, text) in lines.iter().enumerate() {
        let len = text.chars().count();
        for _ in 0..rng.gen_range(0..4) {
            let a = rng.gen_range(0..=len);
            let b = if rng.gen_bool(0.5) {
                a
            } else {
                rng.gen_range(0..=len)
            };
            selections.push(Selection::on_line(line, a, b));
        }
    }

    // An occasional multi-line selection between two random lines.
    if lines.len() > 2 && rng.gen_bool(0.3) {
        let first = rng.gen_range(0..lines.len() - 1);
        let last = rng.gen_range(first + 1..lines.len());
        let start = rng.gen_range(0..=lines[first].chars().count());
        let end = rng.gen_range(0..=lines[last].chars().count());
        selections.push(Selection::new(
            Position::new(first, start),
            Position::new(last, end),
        ));
    }
    selections
}

fn without_spaces(text: &str) -> String {
    text.chars().filter(|&c| c != ' ').collect()
}

fn assert_columns_aligned(buffer: &TextBuffer, policy: BlockPolicy) {
    let lines = build_blocks(&buffer.selections(), policy);
    let layout = resolve_columns(&lines, buffer, &CodePointSpan, buffer.tab_width());
    for column in &layout.columns {
        for &slot in &column.members {
            let block = layout.block(slot, column.index).unwrap();
            assert_eq!(
                block.padding_col_span,
                column.padding_col_span,
                "padding of {:?} in {:?}",
                block,
                buffer.text()
            );
            assert_eq!(
                block.block_col_span,
                column.column_col_span,
                "content of {:?} in {:?}",
                block,
                buffer.text()
            );
        }
    }
}

fn run_random_alignments(policy: BlockPolicy) {
    let mut rng = rand::thread_rng();
    let engine = AlignEngine::new(AlignOptions::default().with_block_policy(policy));

    for _ in 0..500 {
        let line_count = rng.gen_range(1..7);
        let lines: Vec<String> = (0..line_count).map(|_| random_line(&mut rng)).collect();
        let original = lines.join("\n");
        let selections = random_selections(&mut rng, &lines);
        let tab_width = rng.gen_range(1..9);

        let mut buffer = TextBuffer::new(&original)
            .with_tab_width(tab_width)
            .with_selections(selections.clone());

        let outcome = engine.align(&mut buffer).unwrap();
        if let AlignOutcome::Aligned {
            inserted_spaces, ..
        } = &outcome
        {
            assert_eq!(
                buffer.text().chars().count(),
                original.chars().count() + inserted_spaces
            );
            assert_columns_aligned(&buffer, policy);
        } else {
            assert_eq!(buffer.text(), original);
            assert_eq!(buffer.selections(), selections);
        }
        assert_eq!(without_spaces(&buffer.text()), without_spaces(&original));

        let again = engine.align(&mut buffer).unwrap();
        assert!(
            !matches!(again, AlignOutcome::Aligned { .. }),
            "second run inserted spaces into {:?} (from {:?}, selections {:?})",
            buffer.text(),
            original,
            selections
        );
    }
}

#[test]
fn test_random_alignment_multi_cursor() {
    run_random_alignments(BlockPolicy::MultiCursor);
}

#[test]
fn test_random_alignment_merge() {
    run_random_alignments(BlockPolicy::Merge);
}

#[test]
fn test_fewer_than_two_lines_never_inserts() {
    let mut rng = rand::thread_rng();
    let engine = AlignEngine::new(AlignOptions::default());

    for _ in 0..200 {
        let line = random_line(&mut rng);
        let len = line.chars().count();
        let selections: Vec<Selection> = (0..rng.gen_range(0..5))
            .map(|_| Selection::on_line(0, rng.gen_range(0..=len), rng.gen_range(0..=len)))
            .collect();
        let buffer = TextBuffer::new(&format!("{line}\nsecond line")).with_selections(selections);

        let plan = engine.plan(&buffer);
        assert!(plan.is_noop());
        assert!(plan.selections.is_empty());
    }
}

#[test]
fn test_tab_width_example() {
    let buffer = TextBuffer::new("a\tb").with_tab_width(4);
    let text = buffer.text_of_range(0, 0, 3);
    assert_eq!(cursor_align::column_span(&text, 0, buffer.tab_width()), 5);
}
