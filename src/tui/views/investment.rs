//! Investment details, purchase and result views
//!
//! All three render from the selected investment. When the selection does
//! not resolve to a catalog product they show a "not found" panel instead.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::{Investment, RiskLevel};
use crate::tui::app::App;
use crate::tui::layout::{centered_rect_fixed, InvestmentLayout};

fn risk_color(risk: RiskLevel) -> Color {
    match risk {
        RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::Red,
    }
}

fn label_line(label: &str, value: String, value_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<16}", label), Style::default().fg(Color::Cyan)),
        Span::styled(value, value_style),
    ])
}

fn panel(title: String) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Shown when the selected investment cannot be resolved
pub fn render_not_found(frame: &mut Frame, message: &str, area: Rect) {
    let rect = centered_rect_fixed(50, 7, area);
    let lines = vec![
        Line::from(Span::styled(
            "Investment not found",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "Press Esc to return to the dashboard",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            ),
        rect,
    );
}

/// Key facts shared by the details and purchase views
fn fact_lines(app: &App, investment: &Investment) -> Vec<Line<'static>> {
    let money = |m| app.settings.format_money(m);
    let mut lines = vec![
        label_line("Type", investment.kind.clone(), Style::default()),
        label_line(
            "Risk",
            investment.risk_level.to_string(),
            Style::default()
                .fg(risk_color(investment.risk_level))
                .add_modifier(Modifier::BOLD),
        ),
        label_line(
            "Expected return",
            format!("{:.1}% per year", investment.expected_return),
            Style::default().fg(Color::Green),
        ),
        label_line(
            "Invest between",
            format!(
                "{} and {}",
                money(investment.min_investment),
                money(investment.max_investment)
            ),
            Style::default(),
        ),
        label_line("Status", investment.status.to_string(), Style::default()),
    ];
    if let Some(change) = investment.historical_change() {
        let color = if change >= 0.0 { Color::Green } else { Color::Red };
        lines.push(label_line(
            "6-month change",
            format!("{:+.1}%", change),
            Style::default().fg(color),
        ));
    }
    lines
}

/// Render the details screen: facts, description and history chart
pub fn render_details(frame: &mut Frame, app: &App, area: Rect) {
    let investment = match app.current_investment() {
        Ok(investment) => investment,
        Err(e) => return render_not_found(frame, &e.to_string(), area),
    };

    let layout = InvestmentLayout::new(area);

    let mut lines = fact_lines(app, investment);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        investment.description.clone(),
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("i", Style::default().fg(Color::Cyan)),
        Span::raw(" invest  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(" back"),
    ]));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel(investment.name.clone())),
        layout.info,
    );

    render_history(frame, investment, layout.chart);
}

fn render_history(frame: &mut Frame, investment: &Investment, area: Rect) {
    let bars: Vec<Bar> = investment
        .historical_data
        .iter()
        .map(|point| {
            Bar::default()
                .label(point.period.clone().into())
                .value(point.value.max(0.0).round() as u64)
                .text_value(format!("{:.1}", point.value))
        })
        .collect();

    let chart = BarChart::default()
        .block(panel("Performance".to_string()))
        .data(BarGroup::default().bars(&bars))
        .bar_width(6)
        .bar_gap(1)
        .bar_style(Style::default().fg(risk_color(investment.risk_level)))
        .value_style(Style::default().fg(Color::Black).bg(risk_color(investment.risk_level)));

    frame.render_widget(chart, area);
}

/// Render the purchase form
pub fn render_purchase(frame: &mut Frame, app: &App, area: Rect) {
    let investment = match app.current_investment() {
        Ok(investment) => investment,
        Err(e) => return render_not_found(frame, &e.to_string(), area),
    };

    let rect = centered_rect_fixed(64, 16, area);
    let block = panel(format!("Invest in {}", investment.name));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Facts
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(fact_lines(app, investment)), chunks[0]);
    frame.render_widget(app.purchase_input.clone(), chunks[2]);

    if let Some(ref error) = app.purchase_error {
        frame.render_widget(
            Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true }),
            chunks[4],
        );
    }

    let hints = Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Green)),
        Span::raw(" confirm  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(" back to dashboard"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[5]);
}

/// Render the purchase summary
pub fn render_result(frame: &mut Frame, app: &App, area: Rect) {
    let investment = match app.current_investment() {
        Ok(investment) => investment,
        Err(e) => return render_not_found(frame, &e.to_string(), area),
    };

    let rect = centered_rect_fixed(60, 12, area);
    let money = |m| app.settings.format_money(m);

    let mut lines = vec![
        Line::from(Span::styled(
            "✓ Investment confirmed",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    match &app.last_quote {
        Some(quote) => {
            lines.push(label_line("Invested", money(quote.amount), Style::default()));
            lines.push(label_line(
                "Expected return",
                format!("{:.1}%", investment.expected_return),
                Style::default(),
            ));
            lines.push(label_line(
                "Value in 1 year",
                money(quote.projected_value),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            lines.push(label_line(
                "Projected profit",
                money(quote.projected_profit),
                Style::default().fg(Color::Green),
            ));
        }
        None => lines.push(Line::from("No purchase amount recorded.")),
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to return to the dashboard",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(
        Paragraph::new(lines).block(panel(investment.name.clone())),
        rect,
    );
}
