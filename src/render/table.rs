//! Generic two-sided metric comparison table.
//!
//! Teams and players only differ in their row definitions; the markup is
//! produced by a single renderer.

use serde::{Deserialize, Serialize};

use super::{escape_html, number, result_card};
use crate::models::{PlayerComparison, PlayerStats, PlayerVerdicts, TeamComparison, TeamStats, TeamVerdicts};

/// Label the backend uses when neither side has the advantage.
pub const DRAW_LABEL: &str = "Empate";

/// How a client-computed advantage cell resolves equal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiePolicy {
    /// Equal values name the first entity (team1 / player1).
    #[default]
    FirstWins,
    /// Equal values name the second entity.
    SecondWins,
    /// Equal values render as a draw.
    Draw,
}

impl TiePolicy {
    pub const ALL: [TiePolicy; 3] = [TiePolicy::FirstWins, TiePolicy::SecondWins, TiePolicy::Draw];

    /// Strict greater-than; the policy only decides exact ties
    /// (and incomparable values such as NaN).
    pub fn pick<'a>(self, first: (&'a str, f64), second: (&'a str, f64)) -> &'a str {
        if first.1 > second.1 {
            first.0
        } else if second.1 > first.1 {
            second.0
        } else {
            match self {
                TiePolicy::FirstWins => first.0,
                TiePolicy::SecondWins => second.0,
                TiePolicy::Draw => DRAW_LABEL,
            }
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            TiePolicy::FirstWins => "first_wins",
            TiePolicy::SecondWins => "second_wins",
            TiePolicy::Draw => "draw",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            TiePolicy::FirstWins => "Gana el primero",
            TiePolicy::SecondWins => "Gana el segundo",
            TiePolicy::Draw => "Empate",
        }
    }
}

/// Where a row's advantage cell comes from.
pub enum AdvantageSource<S, V> {
    /// Taken verbatim from the backend's verdict object.
    Server(fn(&V) -> String),
    /// Computed locally from a numeric metric on each side.
    GreaterThan(fn(&S) -> f64),
}

pub struct MetricRow<S, V> {
    pub label: &'static str,
    pub value: fn(&S) -> String,
    pub advantage: AdvantageSource<S, V>,
}

impl<S, V> MetricRow<S, V> {
    pub fn server(label: &'static str, value: fn(&S) -> String, verdict: fn(&V) -> String) -> Self {
        Self {
            label,
            value,
            advantage: AdvantageSource::Server(verdict),
        }
    }

    pub fn compared(label: &'static str, value: fn(&S) -> String, metric: fn(&S) -> f64) -> Self {
        Self {
            label,
            value,
            advantage: AdvantageSource::GreaterThan(metric),
        }
    }
}

/// A backend comparison payload that can be rendered as a metric table.
pub trait Comparison {
    type Side;
    type Verdicts;

    const TITLE: &'static str;

    fn sides(&self) -> (&Self::Side, &Self::Side);
    fn verdicts(&self) -> &Self::Verdicts;
    fn name(side: &Self::Side) -> &str;
    /// Headline cards, rendered pairwise (first side, then second) per entry.
    fn summary_cards(side: &Self::Side) -> Vec<(&'static str, String)>;
    fn rows() -> Vec<MetricRow<Self::Side, Self::Verdicts>>;
}

pub fn render_comparison<C: Comparison>(data: &C, ties: TiePolicy) -> String {
    let (first, second) = data.sides();
    let (first_name, second_name) = (C::name(first), C::name(second));

    let mut cards = String::new();
    let first_cards = C::summary_cards(first);
    let second_cards = C::summary_cards(second);
    for ((label, a), (_, b)) in first_cards.iter().zip(second_cards.iter()) {
        cards.push_str(&result_card(&format!("{} - {}", first_name, label), a));
        cards.push_str(&result_card(&format!("{} - {}", second_name, label), b));
    }

    let mut body = String::new();
    for row in C::rows() {
        let advantage = match row.advantage {
            AdvantageSource::Server(verdict) => verdict(data.verdicts()),
            AdvantageSource::GreaterThan(metric) => ties
                .pick((first_name, metric(first)), (second_name, metric(second)))
                .to_string(),
        };
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"winner\">{}</td></tr>\n",
            escape_html(row.label),
            escape_html(&(row.value)(first)),
            escape_html(&(row.value)(second)),
            escape_html(&advantage),
        ));
    }

    format!(
        r#"<h3>{title}</h3>
<div class="results-grid">{cards}</div>
<table class="comparison-table">
<thead><tr><th>Métrica</th><th>{first}</th><th>{second}</th><th>Ventaja</th></tr></thead>
<tbody>
{body}</tbody>
</table>"#,
        title = C::TITLE,
        cards = cards,
        first = escape_html(first_name),
        second = escape_html(second_name),
        body = body,
    )
}

fn percent(value: f64) -> String {
    format!("{}%", number(value))
}

fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", number(value))
    } else {
        number(value)
    }
}

impl Comparison for TeamComparison {
    type Side = TeamStats;
    type Verdicts = TeamVerdicts;

    const TITLE: &'static str = "📊 Comparación de Equipos";

    fn sides(&self) -> (&TeamStats, &TeamStats) {
        (&self.team1, &self.team2)
    }

    fn verdicts(&self) -> &TeamVerdicts {
        &self.comparison
    }

    fn name(side: &TeamStats) -> &str {
        &side.team
    }

    fn summary_cards(side: &TeamStats) -> Vec<(&'static str, String)> {
        vec![("Goles", side.goals.to_string()), ("xG", number(side.xg))]
    }

    fn rows() -> Vec<MetricRow<TeamStats, TeamVerdicts>> {
        type Row = MetricRow<TeamStats, TeamVerdicts>;
        vec![
            Row::server("Goles", |t| t.goals.to_string(), |v| v.more_goals.clone()),
            Row::compared("xG", |t| number(t.xg), |t| t.xg),
            Row::server("Precisión Pase", |t| percent(t.pass_accuracy), |v| v.better_passing.clone()),
            Row::server("Pressing/Partido", |t| number(t.pressures_per_game), |v| v.more_pressing.clone()),
            Row::server("Conversión", |t| percent(t.conversion_rate), |v| v.more_efficient.clone()),
            Row::compared("Éxito Regates", |t| percent(t.dribble_success), |t| t.dribble_success),
        ]
    }
}

impl Comparison for PlayerComparison {
    type Side = PlayerStats;
    type Verdicts = PlayerVerdicts;

    const TITLE: &'static str = "👥 Comparación de Jugadores";

    fn sides(&self) -> (&PlayerStats, &PlayerStats) {
        (&self.player1, &self.player2)
    }

    fn verdicts(&self) -> &PlayerVerdicts {
        &self.comparison
    }

    fn name(side: &PlayerStats) -> &str {
        &side.player
    }

    fn summary_cards(side: &PlayerStats) -> Vec<(&'static str, String)> {
        vec![
            ("G+A", (u64::from(side.goals) + u64::from(side.assists)).to_string()),
            ("xG", number(side.xg)),
        ]
    }

    fn rows() -> Vec<MetricRow<PlayerStats, PlayerVerdicts>> {
        type Row = MetricRow<PlayerStats, PlayerVerdicts>;
        vec![
            Row::server("Goles", |p| p.goals.to_string(), |v| v.more_goals.clone()),
            Row::server("Asistencias", |p| p.assists.to_string(), |v| v.more_assists.clone()),
            Row::compared("xG", |p| number(p.xg), |p| p.xg),
            Row::server("Sobre xG", |p| signed(p.goals_over_xg), |v| v.better_conversion.clone()),
            Row::server("Pases Clave", |p| p.key_passes.to_string(), |v| v.more_creative.clone()),
            Row::compared("Precisión Pase", |p| percent(p.pass_accuracy), |p| p.pass_accuracy),
            Row::server(
                "Regates Exitosos",
                |p| format!("{}/{}", p.dribbles_successful, p.dribbles_attempted),
                |v| v.better_dribbler.clone(),
            ),
            Row::server("% Regates", |p| percent(p.dribble_success_rate), |v| v.better_dribbler.clone()),
        ]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::fixtures;

    /// Body rows of the rendered table, one entry per `<tr>` with its cells.
    pub(crate) fn body_rows(html: &str) -> Vec<Vec<String>> {
        let tbody = html
            .split("<tbody>")
            .nth(1)
            .and_then(|rest| rest.split("</tbody>").next())
            .unwrap_or("");
        tbody
            .split("<tr>")
            .skip(1)
            .map(|row| {
                row.split("<td")
                    .skip(1)
                    .map(|cell| {
                        let start = cell.find('>').map(|i| i + 1).unwrap_or(0);
                        let end = cell.find("</td>").unwrap_or(cell.len());
                        cell[start..end].to_string()
                    })
                    .collect()
            })
            .collect()
    }

    pub(crate) fn advantage_for(html: &str, label: &str) -> String {
        body_rows(html)
            .into_iter()
            .find(|cells| cells.first().map(String::as_str) == Some(label))
            .and_then(|cells| cells.get(3).cloned())
            .unwrap_or_else(|| panic!("No row labelled '{}'", label))
    }

    #[test]
    fn test_tie_policy_strict_greater_than() {
        for policy in TiePolicy::ALL {
            assert_eq!(policy.pick(("A", 2.1), ("B", 1.8)), "A");
            assert_eq!(policy.pick(("A", 1.0), ("B", 1.8)), "B");
        }
        assert_eq!(TiePolicy::FirstWins.pick(("A", 1.5), ("B", 1.5)), "A");
        assert_eq!(TiePolicy::SecondWins.pick(("A", 1.5), ("B", 1.5)), "B");
        assert_eq!(TiePolicy::Draw.pick(("A", 1.5), ("B", 1.5)), "Empate");
    }

    #[test]
    fn test_tie_policy_ids_round_trip() {
        for policy in TiePolicy::ALL {
            assert_eq!(TiePolicy::from_id(policy.id()), Some(policy));
        }
        assert_eq!(TiePolicy::from_id("coin_flip"), None);
    }

    #[test]
    fn test_team_table_has_six_rows_in_order() {
        let data = fixtures::team_comparison(
            fixtures::team("Barcelona", 12, 2.1, 61.0),
            fixtures::team("RealMadrid", 9, 1.8, 58.5),
        );
        let html = render_comparison(&data, TiePolicy::FirstWins);
        let labels: Vec<String> = body_rows(&html).into_iter().map(|c| c[0].clone()).collect();
        assert_eq!(
            labels,
            ["Goles", "xG", "Precisión Pase", "Pressing/Partido", "Conversión", "Éxito Regates"]
        );
    }

    #[test]
    fn test_team_xg_advantage_computed_locally() {
        let data = fixtures::team_comparison(
            fixtures::team("Barcelona", 12, 2.1, 61.0),
            fixtures::team("RealMadrid", 9, 1.8, 58.5),
        );
        let html = render_comparison(&data, TiePolicy::FirstWins);
        assert_eq!(advantage_for(&html, "xG"), "Barcelona");
        assert_eq!(advantage_for(&html, "Éxito Regates"), "Barcelona");
        // Server verdicts are used verbatim, even when they disagree with the numbers.
        assert_eq!(advantage_for(&html, "Precisión Pase"), "RealMadrid");
        assert_eq!(advantage_for(&html, "Conversión"), "RealMadrid");
    }

    #[test]
    fn test_team_xg_tie_names_team1_by_default() {
        let data = fixtures::team_comparison(
            fixtures::team("Argentina", 15, 2.4, 50.0),
            fixtures::team("France", 16, 2.4, 50.0),
        );
        let html = render_comparison(&data, TiePolicy::default());
        assert_eq!(advantage_for(&html, "xG"), "Argentina");
        assert_eq!(advantage_for(&html, "Éxito Regates"), "Argentina");

        let html = render_comparison(&data, TiePolicy::Draw);
        assert_eq!(advantage_for(&html, "xG"), "Empate");
    }

    #[test]
    fn test_team_cards_and_headers() {
        let data = fixtures::team_comparison(
            fixtures::team("Barcelona", 12, 2.1, 61.0),
            fixtures::team("RealMadrid", 9, 1.8, 58.5),
        );
        let html = render_comparison(&data, TiePolicy::FirstWins);
        assert!(html.contains("<th>Barcelona</th><th>RealMadrid</th>"));
        assert!(html.contains(r#"<div class="label">Barcelona - Goles</div><div class="value">12</div>"#));
        assert!(html.contains(r#"<div class="label">RealMadrid - xG</div><div class="value">1.8</div>"#));
        assert_eq!(body_rows(&html)[2][1], "85%");
    }

    #[test]
    fn test_player_table_rows_and_formatting() {
        let mut messi = fixtures::player("Messi", 5.2, 81.4);
        messi.goals_over_xg = 1.8;
        let mut mbappe = fixtures::player("Mbappé", 5.9, 81.4);
        mbappe.goals_over_xg = -0.4;
        let data = fixtures::player_comparison(messi, mbappe);

        let html = render_comparison(&data, TiePolicy::FirstWins);
        let rows = body_rows(&html);
        assert_eq!(rows.len(), 8);

        let labels: Vec<&str> = rows.iter().map(|c| c[0].as_str()).collect();
        assert_eq!(
            labels,
            ["Goles", "Asistencias", "xG", "Sobre xG", "Pases Clave", "Precisión Pase", "Regates Exitosos", "% Regates"]
        );

        assert_eq!(rows[3][1], "+1.8");
        assert_eq!(rows[3][2], "-0.4");
        assert_eq!(rows[6][1], "15/24");
        assert_eq!(rows[7][1], "62.5%");

        assert_eq!(advantage_for(&html, "Goles"), "Empate");
        assert_eq!(advantage_for(&html, "xG"), "Mbappé");
        // Equal pass accuracy: first player wins under the default policy.
        assert_eq!(advantage_for(&html, "Precisión Pase"), "Messi");
        // One server field backs both dribble rows.
        assert_eq!(advantage_for(&html, "Regates Exitosos"), "Mbappé");
        assert_eq!(advantage_for(&html, "% Regates"), "Mbappé");

        assert!(html.contains(r#"<div class="label">Messi - G+A</div><div class="value">10</div>"#));
    }

    #[test]
    fn test_names_are_escaped() {
        let data = fixtures::team_comparison(
            fixtures::team("<img src=x>", 1, 0.5, 10.0),
            fixtures::team("B&B", 0, 0.2, 5.0),
        );
        let html = render_comparison(&data, TiePolicy::FirstWins);
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x&gt;"));
        assert!(html.contains("B&amp;B"));
    }

    #[test]
    fn test_extreme_backend_counts_do_not_overflow() {
        let mut messi = fixtures::player("Messi", 5.2, 81.4);
        messi.goals = u32::MAX;
        messi.assists = 1;
        let data = fixtures::player_comparison(messi, fixtures::player("Mbappé", 5.9, 81.4));

        let html = render_comparison(&data, TiePolicy::FirstWins);
        assert!(html.contains(r#"<div class="label">Messi - G+A</div><div class="value">4294967296</div>"#));
    }

    #[test]
    fn test_negative_zero_prints_as_zero() {
        let mut messi = fixtures::player("Messi", -0.0, -0.0);
        messi.goals_over_xg = -0.0;
        let data = fixtures::player_comparison(messi, fixtures::player("Mbappé", 5.9, 81.4));

        let rows = body_rows(&render_comparison(&data, TiePolicy::FirstWins));
        assert_eq!(rows[2][1], "0");
        assert_eq!(rows[3][1], "0");
        assert_eq!(rows[5][1], "0%");
    }
}
