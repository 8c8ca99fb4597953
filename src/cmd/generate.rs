use anyhow::Context;
use std::path::PathBuf;
use std::time::Instant;
use surql_seed::generator::{Generator, GeneratorConfig};
use surql_seed::progress::ConsoleReporter;
use surql_seed::writer::StatementWriter;

pub fn run(output: PathBuf) -> anyhow::Result<()> {
    let config = GeneratorConfig::default();

    println!(
        "Generating {} customers, {} books, {} orders",
        config.customers, config.books, config.orders
    );
    println!("Output: {}", output.display());
    println!();

    let mut writer = StatementWriter::create(&output)
        .with_context(|| format!("failed to open output file: {}", output.display()))?;

    let start_time = Instant::now();

    let mut reporter = ConsoleReporter::new();
    let mut gen = Generator::new(config).with_progress(move |event| reporter.handle(event));
    let stats = gen.generate(&mut writer)?;

    let written = writer
        .finish()
        .with_context(|| format!("failed to flush output file: {}", output.display()))?;

    let elapsed = start_time.elapsed();

    println!("\n✓ Seed file written successfully!");
    println!("\nStatistics:");
    println!("  Customers: {}", stats.customers);
    println!("  Books: {}", stats.books);
    println!("  Orders: {}", stats.orders);
    println!("  Relations: {}", stats.relations);
    println!("  Lines written: {}", written.lines);
    println!("  Bytes written: {:.2} MB", written.bytes as f64 / 1024.0 / 1024.0);
    println!("  Elapsed time: {:.3?}", elapsed);

    if elapsed.as_secs_f64() > 0.0 {
        let throughput = written.bytes as f64 / 1024.0 / 1024.0 / elapsed.as_secs_f64();
        println!("  Throughput: {:.2} MB/s", throughput);
    }

    Ok(())
}
