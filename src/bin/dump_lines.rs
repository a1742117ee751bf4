use menu_ocr_parser::MenuParser;
use std::fs;

fn main() -> anyhow::Result<()> {
    let Some(path) = std::env::args().nth(1) else {
        anyhow::bail!("usage: dump_lines <ocr-text-file>");
    };
    let text = fs::read_to_string(&path)?;
    let parser = MenuParser::default();

    println!("=== OCR LINES ({path}) ===");
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let candidate = parser.is_candidate_line(line);
        let price = candidate.then(|| parser.extract_price(line.trim())).flatten();
        let name = price.and_then(|_| parser.extract_item_name(line.trim()));
        println!("{i}: {line:?} candidate={candidate} price={price:?} name={name:?}");
    }

    let outcome = parser.parse(&text);
    println!(
        "\n{} items, confidence {:.2}",
        outcome.items.len(),
        outcome.confidence
    );

    Ok(())
}
