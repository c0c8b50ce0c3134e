use numparse::{ParseMetrics, ParsedNumber};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(input: &str, number: &ParsedNumber, metrics: &ParseMetrics, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Parsing: \"{}\"", input), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Span ━━━", ansi::GRAY));
    print_span(input, number, &palette);

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    if number.seen_number() {
        print_result(number, &palette);
    } else {
        println!("{}", palette.dim("  No number recognized"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • The input does not start with digits, a sign, or a known affix");
        println!("  • A --pattern prefix did not match the input");
        println!("\n{}", palette.dim("  Tip: Set NUMPARSE_LOG=numparse=trace to see every matcher call"));
    }

    println!("\n{}", palette.paint("━━━ Engine ━━━", ansi::GRAY));
    print_metrics(metrics, &palette);
    println!();
}

fn print_span(input: &str, number: &ParsedNumber, palette: &ansi::Palette) {
    // chars_consumed is a byte offset on a char boundary of `input`.
    let (consumed, rest) = input.split_at(number.chars_consumed.min(input.len()));
    println!(
        "  {}{}  {}",
        palette.bold(palette.paint(consumed, ansi::GREEN)),
        palette.dim(rest),
        palette.paint(format!("span 0..{} of {}", number.chars_consumed, input.len()), ansi::YELLOW),
    );
    if !rest.is_empty() {
        println!("  {} {}", palette.dim("unparsed:"), palette.paint(format!("{rest:?}"), ansi::YELLOW));
    }
}

fn print_result(number: &ParsedNumber, palette: &ansi::Palette) {
    let value = number.to_f64().map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
    println!("  {} {}", palette.dim("value:"), palette.bold(palette.paint(value, ansi::GREEN)));

    if let Some(quantity) = &number.quantity {
        println!("  {} {}", palette.dim("quantity:"), palette.paint(quantity.to_string(), ansi::CYAN));
    }

    let flags: Vec<&str> = number.flags.iter_names().map(|(name, _)| name).collect();
    let flags = if flags.is_empty() { "-".to_string() } else { flags.join(" | ") };
    println!("  {} {}", palette.dim("flags:"), palette.paint(flags, ansi::BLUE));

    if number.prefix.is_some() || number.suffix.is_some() {
        println!(
            "  {} {:?}  {} {:?}",
            palette.dim("prefix:"),
            number.prefix.as_deref().unwrap_or(""),
            palette.dim("│ suffix:"),
            number.suffix.as_deref().unwrap_or(""),
        );
    }
    if let Some(code) = &number.currency_code {
        println!("  {} {}", palette.dim("currency:"), palette.paint(code, ansi::YELLOW));
    }
}

fn print_metrics(metrics: &ParseMetrics, palette: &ansi::Palette) {
    println!(
        "  Strategy: {}  │  Total: {}",
        palette.paint(format!("{:?}", metrics.strategy), ansi::BLUE),
        palette.paint(format!("{:?}", metrics.total), ansi::GREEN),
    );
    println!(
        "  Matcher calls: {}  │  Committed: {}  │  Compared: {}  │  Max depth: {}",
        palette.paint(metrics.matcher_calls.to_string(), ansi::CYAN),
        palette.paint(metrics.committed_matches.to_string(), ansi::CYAN),
        palette.dim(metrics.candidates_compared.to_string()),
        palette.dim(metrics.max_depth.to_string()),
    );
}
