use chrono::NaiveDate;

use crate::config::ReportConfig;
use crate::models::indicators::RsiZone;
use crate::report::snapshot::SymbolSnapshot;

/// Sent instead of a report when either series could not be fetched.
pub const DATA_UNAVAILABLE: &str = "⚠️ Data fetch failed. Check the market data provider.";

const OVERSOLD_SUMMARY: &str =
    "RSI oversold. Further downside is possible, but a rebound zone may be starting.";
const OVERBOUGHT_SUMMARY: &str = "RSI overbought. A pullback is possible.";
const NEUTRAL_SUMMARY: &str =
    "RSI neutral. With room above the low, a sharp drop looks less likely.";

pub fn summary_for(zone: RsiZone) -> &'static str {
    match zone {
        RsiZone::Oversold => OVERSOLD_SUMMARY,
        RsiZone::Overbought => OVERBOUGHT_SUMMARY,
        RsiZone::Neutral => NEUTRAL_SUMMARY,
    }
}

struct Section {
    header: &'static str,
    lines: Vec<String>,
}

impl Section {
    fn new(header: &'static str) -> Self {
        Self {
            header,
            lines: Vec::new(),
        }
    }

    fn push(&mut self, line: Option<String>) {
        if let Some(line) = line {
            self.lines.push(line);
        }
    }
}

/// `• SOXL: $25.3 (low $8.2, +208%)`; `None` without a current price or a recent low.
fn price_vs_low_line(snapshot: &SymbolSnapshot) -> Option<String> {
    let (current, low) = match (snapshot.current, snapshot.recent_low) {
        (Some(current), Some(low)) => (current, low),
        _ => return None,
    };

    let low_part = match snapshot.pct_above_low {
        Some(pct) => format!("low {}, {:+.0}%", snapshot.format_price(low.value), pct),
        None => format!("low {}", snapshot.format_price(low.value)),
    };

    Some(format!(
        "• {}: {} ({})",
        snapshot.symbol.label,
        snapshot.format_price(current),
        low_part
    ))
}

/// Assemble the cycle report for a leveraged instrument and its underlying index.
///
/// Lines whose value is undefined are left out, as are section headers
/// with nothing under them.
pub fn build_report(
    config: &ReportConfig,
    date: NaiveDate,
    leveraged: &SymbolSnapshot,
    underlying: &SymbolSnapshot,
) -> String {
    let mut position = Section::new("📍 Current vs low");
    position.push(price_vs_low_line(leveraged));
    position.push(price_vs_low_line(underlying));

    let mut technicals = Section::new("📉 Technicals");
    technicals.push(
        leveraged
            .rsi
            .map(|rsi| format!("• RSI({}): {:.0}", rsi.period, rsi.value)),
    );
    technicals.push(
        leveraged
            .drawdown
            .map(|mdd| format!("• MDD({}d): {:.1}%", config.mdd_window, mdd.value_pct)),
    );

    let mut cycle = Section::new("🔄 Cycle");
    cycle.push(
        leveraged
            .cycle
            .map(|c| format!("• Low-to-high range: about {:.0}%", c.pct)),
    );

    let mut lines = vec![format!(
        "📊 [Undercurrent] {} cycle report {}",
        leveraged.symbol.label,
        date.format("%Y-%m-%d")
    )];

    for section in [position, technicals, cycle] {
        if section.lines.is_empty() {
            continue;
        }
        lines.push(String::new());
        lines.push(section.header.to_string());
        lines.extend(section.lines);
    }

    if let Some(rsi) = leveraged.rsi {
        lines.push(String::new());
        lines.push(format!("💡 {}", summary_for(RsiZone::classify(rsi.value))));
    }

    lines.join("\n")
}
