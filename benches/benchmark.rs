use criterion::{Criterion, criterion_group, criterion_main};

use charflow::input::InMemoryCharSource;
use charflow::{CharReader, Format, LineSeparator};

/// Builds a synthetic delimited file: `rows` rows of `cols` short fields,
/// terminated by the given separator.
fn synthetic_input(rows: usize, cols: usize, separator: &str) -> String {
    let mut input = String::with_capacity(rows * cols * 8);
    for row in 0..rows {
        for col in 0..cols {
            if col > 0 {
                input.push(',');
            }
            input.push_str("field");
            input.push_str(&(row * cols + col).to_string());
        }
        input.push_str(separator);
    }
    input
}

fn drain(reader: &mut CharReader<InMemoryCharSource>) -> u64 {
    let mut count = 0;
    while let Some(_ch) = reader.next_char().unwrap() {
        count += 1;
    }
    count
}

fn read_all(input: &str, separator: LineSeparator, normalize: bool) -> u64 {
    let format = Format::default().with_line_separator(separator);
    let mut reader = CharReader::new(format);
    reader.start(InMemoryCharSource::from_str(input)).unwrap();
    reader.enable_normalize_line_endings(normalize);
    drain(&mut reader)
}

fn char_stream_throughput(c: &mut Criterion) {
    let crlf_input = synthetic_input(5_000, 8, "\r\n");
    let lf_input = synthetic_input(5_000, 8, "\n");

    c.bench_function("crlf_normalized", |b| {
        b.iter(|| read_all(&crlf_input, LineSeparator::CRLF, true));
    });
    c.bench_function("crlf_verbatim", |b| {
        b.iter(|| read_all(&crlf_input, LineSeparator::CRLF, false));
    });
    c.bench_function("lf_normalized", |b| {
        b.iter(|| read_all(&lf_input, LineSeparator::LF, true));
    });
}

fn line_skipping(c: &mut Criterion) {
    let input = synthetic_input(20_000, 4, "\n");

    c.bench_function("skip_lines", |b| {
        b.iter(|| {
            let mut reader = CharReader::for_str(&input).unwrap();
            reader.skip_lines(19_999).unwrap();
            reader.line_count()
        });
    });
}

criterion_group!(throughput, char_stream_throughput);
criterion_group! {
    name = skipping;
    config = Criterion::default().sample_size(10);
    targets = line_skipping
}
criterion_main!(throughput, skipping);
