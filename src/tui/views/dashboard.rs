//! Dashboard view
//!
//! Salary and credit card balances with usage gauges, the low-funds warning,
//! the expense list and the investment catalog.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, List, ListItem, ListState, Paragraph, Row, Table},
    Frame,
};

use crate::models::RiskLevel;
use crate::services::{DerivedMetrics, UsagePair};
use crate::tui::app::App;
use crate::tui::layout::DashboardLayout;

/// Render the dashboard
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = DashboardLayout::new(area);
    let metrics = app.metrics();

    render_salary_card(frame, app, &metrics, layout.salary_card);
    render_credit_card(frame, app, &metrics, layout.credit_card);
    render_warning(frame, app, &metrics, layout.warning);
    render_expenses(frame, app, layout.expenses);
    render_investments(frame, app, layout.investments);
}

/// Gauge color by share used
fn usage_color(usage: &UsagePair) -> Color {
    match usage.percent() {
        0..=59 => Color::Green,
        60..=79 => Color::Yellow,
        _ => Color::Red,
    }
}

fn card_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn card_rows(inner: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner)
}

fn usage_gauge(usage: &UsagePair) -> Gauge<'static> {
    Gauge::default()
        .gauge_style(Style::default().fg(usage_color(usage)).bg(Color::Black))
        .ratio(usage.fraction())
        .label(format!("{}% used", usage.percent()))
}

fn render_salary_card(frame: &mut Frame, app: &App, metrics: &DerivedMetrics, area: Rect) {
    let state = app.ledger.state();
    let block = card_block("Salary");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let rows = card_rows(inner);

    let remaining_color = if metrics.remaining_salary.is_negative() {
        Color::Red
    } else if metrics.salary_is_low(state.salary) {
        Color::Yellow
    } else {
        Color::Green
    };

    let headline = Line::from(vec![
        Span::raw("Remaining "),
        Span::styled(
            app.settings.format_money(metrics.remaining_salary),
            Style::default()
                .fg(remaining_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" of {}", app.settings.format_money(state.salary)),
            Style::default().fg(Color::Gray),
        ),
    ]);
    frame.render_widget(Paragraph::new(headline), rows[0]);

    let detail = format!(
        "Expenses {}  Bill paid {}",
        app.settings.format_money(metrics.salary_expenses),
        app.settings.format_money(state.credit_bill_paid())
    );
    frame.render_widget(
        Paragraph::new(detail).style(Style::default().fg(Color::DarkGray)),
        rows[1],
    );
    frame.render_widget(usage_gauge(&metrics.salary_usage), rows[2]);
}

fn render_credit_card(frame: &mut Frame, app: &App, metrics: &DerivedMetrics, area: Rect) {
    let state = app.ledger.state();
    let block = card_block("Credit Card");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let rows = card_rows(inner);

    let available_color = if metrics.available_credit.is_negative() {
        Color::Red
    } else if metrics.credit_is_high(state.credit_limit) {
        Color::Yellow
    } else {
        Color::Green
    };

    let headline = Line::from(vec![
        Span::raw("Available "),
        Span::styled(
            app.settings.format_money(metrics.available_credit),
            Style::default()
                .fg(available_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" of {}", app.settings.format_money(state.credit_limit)),
            Style::default().fg(Color::Gray),
        ),
    ]);
    frame.render_widget(Paragraph::new(headline), rows[0]);

    let detail = format!(
        "Charged {}  Bill due {}",
        app.settings.format_money(metrics.credit_expenses),
        app.settings.format_money(state.outstanding_credit())
    );
    frame.render_widget(
        Paragraph::new(detail).style(Style::default().fg(Color::DarkGray)),
        rows[1],
    );
    frame.render_widget(usage_gauge(&metrics.credit_usage), rows[2]);
}

/// Text of the low-funds warning, if it applies
pub fn warning_text(app: &App, metrics: &DerivedMetrics) -> Option<String> {
    if !metrics.is_low_funds {
        return None;
    }
    let state = app.ledger.state();
    let reasons = metrics.low_funds_reasons(state.salary, state.credit_limit);
    Some(format!("⚠ Low funds: {}", reasons.join(", ")))
}

fn render_warning(frame: &mut Frame, app: &App, metrics: &DerivedMetrics, area: Rect) {
    if let Some(text) = warning_text(app, metrics) {
        frame.render_widget(
            Paragraph::new(text).style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            area,
        );
    }
}

fn render_expenses(frame: &mut Frame, app: &App, area: Rect) {
    let expenses = app.ledger.state().expenses();

    let block = Block::default()
        .title(format!(" Expenses ({}) ", expenses.len()))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if expenses.is_empty() {
        let text = Paragraph::new("No expenses yet. Press 'a' to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Category"),
        Cell::from("Paid with"),
        Cell::from("Amount"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    // Newest first
    let rows: Vec<Row> = expenses
        .iter()
        .rev()
        .map(|expense| {
            let method_color = if expense.is_credit() {
                Color::Magenta
            } else {
                Color::Blue
            };
            Row::new(vec![
                Cell::from(expense.icon.glyph()),
                Cell::from(expense.category.clone()),
                Cell::from(expense.payment_method.to_string())
                    .style(Style::default().fg(method_color)),
                Cell::from(format!(
                    "{:>12}",
                    app.settings.format_money(expense.amount)
                )),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Min(12),
        Constraint::Length(12),
        Constraint::Length(13),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}

fn risk_color(risk: RiskLevel) -> Color {
    match risk {
        RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::Red,
    }
}

fn render_investments(frame: &mut Frame, app: &App, area: Rect) {
    let investments = app.catalog().investments();

    let items: Vec<ListItem> = investments
        .iter()
        .map(|inv| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    inv.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled(
                        format!("  {} risk", inv.risk_level),
                        Style::default().fg(risk_color(inv.risk_level)),
                    ),
                    Span::styled(
                        format!("  {:.1}% p.a.", inv.expected_return),
                        Style::default().fg(Color::Gray),
                    ),
                ]),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Investments ")
                .title_style(Style::default().add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(
        (!investments.is_empty()).then_some(app.selected_investment_index),
    );
    frame.render_stateful_widget(list, area, &mut state);
}
