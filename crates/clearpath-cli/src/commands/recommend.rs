//! Recommendations command

use std::path::Path;

use anyhow::Result;

use clearpath_core::recommendations::{Priority, Recommendation};
use clearpath_core::generate_recommendations;

use super::{load_snapshot, print_json, Session};

fn priority_icon(priority: Priority) -> &'static str {
    match priority {
        Priority::Critical => "🔴",
        Priority::High => "🟠",
        Priority::Medium => "🟡",
        Priority::Low => "🟢",
    }
}

pub fn print_recommendations(recommendations: &[Recommendation]) {
    if recommendations.is_empty() {
        println!("   ✅ Nothing to flag. Keep it up.");
        return;
    }

    for rec in recommendations {
        println!(
            "   {} [{}] {}",
            priority_icon(rec.priority),
            rec.priority,
            rec.title
        );
        println!("      {}", rec.description);
        if let Some(savings) = rec.estimated_impact.as_ref().and_then(|i| i.savings) {
            println!("      Potential impact: {:.2}", savings);
        }
    }
}

pub fn cmd_recommend(session: &Session, snapshot_path: &Path) -> Result<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let recommendations = generate_recommendations(
        &snapshot.credit_cards,
        &snapshot.loans,
        &snapshot.investments,
        snapshot.monthly_income,
    );

    if session.json {
        return print_json(&recommendations);
    }

    println!();
    println!("💡 Recommendations ({})", recommendations.len());
    println!("   ─────────────────────────────────────────────────────────────");
    print_recommendations(&recommendations);

    Ok(())
}
