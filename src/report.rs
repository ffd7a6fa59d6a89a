use wordgrid::{LexiconKind, OriginMetrics, SolveDetails};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    /// Styles text when color is on, passes it through otherwise.
    #[derive(Debug, Clone, Copy)]
    pub struct Palette(pub bool);

    impl Palette {
        pub fn paint(self, s: impl std::fmt::Display, style: &str) -> String {
            if self.0 { format!("{style}{s}{RESET}") } else { s.to_string() }
        }
    }
}

pub fn print_run(details: &SolveDetails, color: bool) {
    let palette = ansi::Palette(color);
    let kind = match details.lexicon {
        LexiconKind::Trie => "trie",
        LexiconKind::Flat => "flat set",
    };
    println!(
        "\n{}",
        palette.paint(palette.paint(format!("⚙  Grid {} ({kind})", details.grid.size()), ansi::CYAN), ansi::BOLD)
    );

    println!("\n{}", palette.paint("━━━ Grid ━━━", ansi::GRAY));
    for line in details.grid.to_string().lines() {
        println!("  {}", palette.paint(line, ansi::BOLD));
    }

    println!("\n{}", palette.paint("━━━ Lexicon ━━━", ansi::GRAY));
    print_lexicon(details, palette);

    println!("\n{}", palette.paint("━━━ Search ━━━", ansi::GRAY));
    if details.search.emitted == 0 {
        println!("{}", palette.paint("  No words found", ansi::DIM));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • Grid symbols and word list differ in case (bytes are compared as-is)");
        println!("  • The word list is empty or was saved with an unexpected encoding");
        println!("\n{}", palette.paint("  Tip: Set WORDGRID_LOG=trace to see every pruned prefix", ansi::DIM));
    } else {
        print_origins(details, palette);
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Load: {}  │  Search: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.load), ansi::CYAN),
        palette.paint(format!("{:?}", details.search.elapsed), ansi::DIM),
    );
    println!();
}

fn print_lexicon(details: &SolveDetails, palette: ansi::Palette) {
    println!("  {} {}", palette.paint("words:", ansi::DIM), palette.paint(details.lexicon_words, ansi::BLUE));
    match details.dictionary {
        Some(stats) => {
            println!("  {} {}", palette.paint("nodes:", ansi::DIM), palette.paint(stats.allocated_nodes, ansi::BLUE))
        }
        None => println!("  {}", palette.paint("no prefix pruning: every path is enumerated", ansi::YELLOW)),
    }
}

fn print_origins(details: &SolveDetails, palette: ansi::Palette) {
    let search = &details.search;
    println!(
        "  {} {}  {} {}  {} {}  {} {}",
        palette.paint("paths:", ansi::DIM),
        palette.paint(search.paths, ansi::YELLOW),
        palette.paint("pruned:", ansi::DIM),
        palette.paint(search.pruned, ansi::YELLOW),
        palette.paint("found:", ansi::DIM),
        palette.paint(search.emitted, ansi::GREEN),
        palette.paint("longest:", ansi::DIM),
        palette.paint(search.longest, ansi::GREEN),
    );

    for origin in &search.origins {
        let symbol = details.grid.at(origin.cell);
        println!("    {}", fmt_origin_compact(origin, symbol, palette));
        for sample in origin.samples.iter().take(5) {
            println!("      {}", palette.paint(sample, ansi::GREEN));
        }
        if origin.samples.len() > 5 {
            println!("      {}", palette.paint(format!("... +{} more", origin.samples.len() - 5), ansi::DIM));
        }
    }
}

fn fmt_origin_compact(origin: &OriginMetrics, symbol: u8, palette: ansi::Palette) -> String {
    let found = if origin.emitted > 0 {
        palette.paint(format!("✓ {} words", origin.emitted), ansi::GREEN)
    } else {
        palette.paint(format!("✗ {} words", origin.emitted), ansi::DIM)
    };
    format!(
        "{} {} {} {}",
        palette.paint(format!("({},{})", origin.cell.row, origin.cell.col), ansi::YELLOW),
        palette.paint(String::from_utf8_lossy(&[symbol]), ansi::BLUE),
        found,
        palette.paint(format!("│ {} paths, {} pruned, {:?}", origin.paths, origin.pruned, origin.duration), ansi::DIM),
    )
}
