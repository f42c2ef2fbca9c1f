//! Terminal rendering of journey steps

use colored::Colorize;

use crate::completeness::is_complete;
use crate::domain::money::format_amount;
use crate::domain::{
    CYBER_QUESTIONS, CyberLevel, INSURANCE_TYPES, Journey, LineItem, RiskCategory, Step, sorted_by_priority,
};
use crate::status::StatusReport;
use crate::tracking::TrackingSummary;

/// One-line progress indicator across all steps
pub fn progress(journey: &Journey, current: Step) -> String {
    Step::ALL
        .iter()
        .map(|&step| {
            let label = format!("{} {}", step.number(), step.title());
            if step == current {
                format!("[{}]", label).bold().to_string()
            } else if is_complete(journey, step) {
                format!("{} ✓", label).green().to_string()
            } else {
                label.dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" › ")
}

/// Full rendering of one step
pub fn render_step(journey: &Journey, step: Step, explanation: Option<&str>) -> String {
    let mut lines = vec![
        progress(journey, step),
        String::new(),
        step.to_string().bright_cyan().bold().to_string(),
        step.description().dimmed().to_string(),
        String::new(),
    ];
    lines.extend(match step {
        Step::CashFlow => cash_flow(journey),
        Step::NetWorth => net_worth(journey),
        Step::Goals => goals(journey),
        Step::RiskAssessment => risk(journey),
        Step::Protection => protection(journey),
        Step::Plan => plan(journey, explanation),
        Step::Track => track(journey),
        Step::Status => status(journey),
    });
    lines.join("\n")
}

fn amount_line(label: &str, value: f64) -> String {
    format!("  {:<22} {}", label, format_amount(value))
}

fn cash_flow(journey: &Journey) -> Vec<String> {
    let cf = &journey.cash_flow;
    let mut lines = vec![amount_line("Monthly income", cf.monthly_income)];
    if cf.monthly_expenses.is_empty() {
        lines.push("  No expenses recorded".to_string());
    } else {
        lines.push("  Expenses:".to_string());
        for (category, amount) in &cf.monthly_expenses {
            lines.push(format!("    {:<20} {}", category, format_amount(*amount)));
        }
    }
    lines.push(amount_line("Total expenses", cf.total_expenses));
    lines.push(amount_line("Net cash flow", cf.net_cash_flow));
    lines
}

fn items(title: &str, items: &[LineItem], lines: &mut Vec<String>) {
    lines.push(format!("  {}:", title));
    if items.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, item) in items.iter().enumerate() {
        lines.push(format!("    {}. {:<20} {}", i + 1, item.name, format_amount(item.amount)));
    }
}

fn net_worth(journey: &Journey) -> Vec<String> {
    let nw = &journey.net_worth;
    let mut lines = Vec::new();
    items("Assets", &nw.assets, &mut lines);
    items("Liabilities", &nw.liabilities, &mut lines);
    lines.push(amount_line("Total assets", nw.total_assets));
    lines.push(amount_line("Total liabilities", nw.total_liabilities));
    lines.push(amount_line("Net worth", nw.net_worth));
    lines
}

fn goals(journey: &Journey) -> Vec<String> {
    let sorted = sorted_by_priority(&journey.goals.goals);
    if sorted.is_empty() {
        return vec!["  No goals yet".to_string()];
    }
    sorted
        .iter()
        .enumerate()
        .map(|(i, goal)| {
            format!(
                "  {}. {} - {} in {} months [{}] priority {}",
                i + 1,
                goal.name,
                format_amount(goal.target_amount),
                goal.timeline,
                goal.category,
                goal.priority
            )
        })
        .collect()
}

fn risk(journey: &Journey) -> Vec<String> {
    let ra = &journey.risk_assessment;
    let mut lines = vec![
        format!("  Risk tolerance: {}/10", ra.risk_tolerance),
        format!("  Risk capacity:  {}/10", ra.risk_capacity),
        format!("  Overall profile: {}", ra.overall_risk_profile),
    ];
    for category in [RiskCategory::Tolerance, RiskCategory::Capacity] {
        lines.push(String::new());
        lines.push(format!("  Questions ({}):", category));
        for question in category.questions() {
            lines.push(format!("    {}. {}", question.id, question.question));
            for option in &question.options {
                lines.push(format!("       {} = {}", option.score, option.text).dimmed().to_string());
            }
        }
    }
    lines
}

fn protection(journey: &Journey) -> Vec<String> {
    let wp = &journey.wealth_protection;
    let mut lines = vec![
        format!(
            "  Cyber awareness: {}/10 ({})",
            wp.cyber_awareness,
            CyberLevel::from_score(wp.cyber_awareness)
        ),
        format!("  Emergency fund target: {} months", wp.emergency_fund_months),
        amount_line(
            "Recommended fund",
            journey.cash_flow.total_expenses * f64::from(wp.emergency_fund_months),
        ),
        format!("  Protection score: {}/10", wp.protection_score),
        "  Insurance:".to_string(),
    ];
    for insurance in INSURANCE_TYPES {
        let held = wp.insurance_needs.get(insurance.name).copied().unwrap_or(false);
        lines.push(format!("    [{}] {}", if held { "x" } else { " " }, insurance.name));
    }
    lines.push("  Cyber checklist:".to_string());
    for question in CYBER_QUESTIONS {
        lines.push(format!("    {}. {}", question.id, question.question).dimmed().to_string());
    }
    lines
}

fn plan(journey: &Journey, explanation: Option<&str>) -> Vec<String> {
    let Some(rec) = &journey.recommendations else {
        return vec!["  No plan yet. Run `plan generate`.".to_string()];
    };
    let mut lines = vec![
        format!("  Equity {}% / Debt {}%", rec.equity_allocation, rec.debt_allocation),
        amount_line("Emergency fund", rec.emergency_fund),
    ];
    if !rec.mutual_funds.is_empty() {
        lines.push("  Mutual funds:".to_string());
        for fund in &rec.mutual_funds {
            lines.push(format!(
                "    {} ({}, {} risk) {}%",
                fund.name, fund.fund_type, fund.risk_level, fund.allocation
            ));
        }
    }
    for (title, holdings) in [("Commodities", &rec.commodities), ("Cryptocurrency", &rec.cryptocurrency)] {
        if holdings.is_empty() {
            continue;
        }
        lines.push(format!("  {}:", title));
        for holding in holdings {
            lines.push(format!("    {} {}% - {}", holding.name, holding.allocation, holding.reasoning));
        }
    }
    if !rec.investment_strategy.is_empty() {
        lines.push(String::new());
        lines.push(format!("  {}", rec.investment_strategy));
    }
    if let Some(text) = explanation {
        lines.push(String::new());
        lines.push("  Local AI explanation:".bright_cyan().to_string());
        lines.extend(text.lines().map(|l| format!("  {}", l)));
    }
    lines
}

/// Tracking history, most recent month first, numbered for deletion
pub fn track(journey: &Journey) -> Vec<String> {
    let summary = TrackingSummary::from_history(&journey.tracking_history);
    let mut lines = vec![
        amount_line("Average income", summary.average_income),
        amount_line("Average expenses", summary.average_expenses),
        amount_line("Total invested", summary.total_invested),
    ];
    if summary.records.is_empty() {
        lines.push("  No months tracked yet".to_string());
    }
    for (position, (_, record)) in summary.records.iter().enumerate() {
        let mut line = format!(
            "  {}. {}  income {}  expenses {}  net {}  invested {}",
            position + 1,
            record.month,
            format_amount(record.income),
            format_amount(record.expenses),
            format_amount(record.net_cash_flow),
            format_amount(record.investment)
        );
        if !record.notes.is_empty() {
            line.push_str(&format!("  ({})", record.notes));
        }
        lines.push(line);
    }
    lines
}

fn status(journey: &Journey) -> Vec<String> {
    let report = StatusReport::from_journey(journey);
    let mut lines = vec![
        amount_line("Net worth", report.net_worth),
        amount_line("Monthly income", report.monthly_income),
        amount_line("Monthly expenses", report.monthly_expenses),
        format!("  {:<22} {}% ({})", "Savings rate", report.savings_rate, report.savings_health),
        String::new(),
        format!(
            "  Debt-to-asset: {}% ({}), equity-to-asset {}%",
            report.debt_to_asset_ratio, report.debt_health, report.equity_to_asset_ratio
        ),
        format!("  Cash flow: {}", report.cash_flow_balance),
        format!("  Net worth: {}", report.net_worth_balance),
        format!(
            "  Allocation: Equity {}% / Debt {}%",
            report.equity_allocation, report.debt_allocation
        ),
    ];
    if !report.expense_breakdown.is_empty() {
        lines.push("  Expense breakdown:".to_string());
        for (category, amount) in &report.expense_breakdown {
            lines.push(format!("    {:<20} {}", category, format_amount(*amount)));
        }
    }
    lines.push("  Cash flow by month:".to_string());
    for point in &report.cash_flow_series {
        lines.push(format!(
            "    {:<8} income {}  expenses {}  savings {}",
            point.month,
            format_amount(point.income),
            format_amount(point.expenses),
            format_amount(point.savings)
        ));
    }
    lines.push("  Net worth by month:".to_string());
    for point in &report.net_worth_series {
        lines.push(format!("    {:<8} {}", point.month, format_amount(point.net_worth)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CashFlow, LineItem, NetWorth, Recommendation};
    use crate::tracking::TrackingEntry;
    use std::collections::BTreeMap;

    #[test]
    fn test_render_cash_flow() {
        let mut journey = Journey::default();
        journey.cash_flow = CashFlow::from_parts(50_000.0, BTreeMap::from([("Rent".to_string(), 30_000.0)]));
        let out = render_step(&journey, Step::CashFlow, None);
        assert!(out.contains("Step 1: Cash Flow"));
        assert!(out.contains("Rent"));
        assert!(out.contains("₹20,000"));
    }

    #[test]
    fn test_render_plan_without_recommendation() {
        let out = render_step(&Journey::default(), Step::Plan, None);
        assert!(out.contains("No plan yet"));
    }

    #[test]
    fn test_render_plan_with_explanation() {
        let mut journey = Journey::default();
        journey.recommendations = Some(Recommendation {
            equity_allocation: 70.0,
            debt_allocation: 30.0,
            investment_strategy: "Grow.".to_string(),
            ..Default::default()
        });
        let out = render_step(&journey, Step::Plan, Some("Mostly stocks."));
        assert!(out.contains("Equity 70% / Debt 30%"));
        assert!(out.contains("Mostly stocks."));
    }

    #[test]
    fn test_render_status_labels() {
        let mut journey = Journey::default();
        journey.cash_flow = CashFlow::from_parts(50_000.0, BTreeMap::from([("Rent".to_string(), 30_000.0)]));
        let out = render_step(&journey, Step::Status, None);
        assert!(out.contains("40% (Excellent)"));
        assert_eq!(out.matches("40%").count(), 1);
        assert!(out.contains("Cash flow: Positive"));
        assert!(out.contains("Current"));
    }

    #[test]
    fn test_render_status_net_worth_series() {
        let mut journey = Journey::default();
        journey.net_worth = NetWorth::from_items(vec![LineItem::new("Savings", 75_000.0)], vec![]);
        journey.tracking_history = ["2026-01", "2026-02"]
            .into_iter()
            .map(|month| {
                TrackingEntry {
                    month: month.to_string(),
                    income: 100.0,
                    expenses: 40.0,
                    investment: 0.0,
                    notes: String::new(),
                }
                .into_record(chrono::Utc::now())
            })
            .collect();

        let out = render_step(&journey, Step::Status, None);
        let series = out.split("Net worth by month:").nth(1).unwrap();
        assert!(series.contains("2026-01"));
        assert!(series.contains("2026-02"));
        assert_eq!(series.matches("₹75,000").count(), 2);
    }
}
