use design_patterns::narrate::Transcript;
use design_patterns::{adapter, decorator, strategy, template_method};

#[test]
fn template_method_demo_mines_both_sources() {
    let out = Transcript::new();
    template_method::demo::run(&out).unwrap();

    let lines = out.lines();
    let csv_open = lines.iter().position(|l| l == "Opening CSV file: data.csv").unwrap();
    let csv_close = lines.iter().position(|l| l == "Closed CSV file").unwrap();
    let pdf_open = lines.iter().position(|l| l == "Opening PDF file: report.pdf").unwrap();

    assert!(csv_open < csv_close && csv_close < pdf_open);
    assert!(out.contains("Analysis result: 3 records"));
    assert!(out.contains("Analysis result: 2 records"));
}

#[test]
fn adapter_demo_reaches_legacy_player() {
    let out = Transcript::new();
    adapter::demo::run(&out);

    assert_eq!(
        out.lines(),
        vec![
            "Adapter: translating the new call into the legacy format",
            "LegacyPlayer: playing movie.avi with the old algorithm...",
        ]
    );
}

#[test]
fn decorator_demo_prints_three_layers() {
    let out = Transcript::new();
    decorator::demo::run(&out);

    let results: Vec<String> = out
        .lines()
        .into_iter()
        .filter(|l| !l.is_empty() && !l.ends_with(':'))
        .collect();

    assert_eq!(
        results,
        vec![
            "Hello",
            "<html><body>Hello</body></html>",
            "=iunm?=cpez?Ifmmp=0cpez?=0iunm?",
        ]
    );
    assert_eq!(decorator::unshift_text(&results[2]), results[1]);
}

#[test]
fn strategy_demo_walks_every_state() {
    let out = Transcript::new();
    strategy::demo::run(&out);

    assert!(out.contains("No payment method has been set."));
    assert!(out.contains("Paid 1500 yen with credit card 1234-5678."));
    assert!(out.contains("Paid 1500 yen with PayPal account user@example.com."));
}

#[test]
fn demos_are_deterministic() {
    let first = Transcript::new();
    let second = Transcript::new();

    for out in [&first, &second] {
        template_method::demo::run(out).unwrap();
        adapter::demo::run(out);
        decorator::demo::run(out);
        strategy::demo::run(out);
    }

    assert_eq!(first.lines(), second.lines());
}
