//! Fixture data served by the mock backend

use crate::model::{BarSeries, PieSeries, RankedEntry};

const ATTENDANTS: [(&str, i64); 12] = [
    ("Henrique", 32),
    ("Gabriela", 24),
    ("Eduarda", 15),
    ("Ana", 9),
    ("Felipe", 0),
    ("Carla", -8),
    ("Bruno", -19),
    ("Daniel", -25),
    ("Luciana", 18),
    ("Paulo", 5),
    ("Marina", -12),
    ("Ricardo", 7),
];

const NAMED_CLIENTS: [(&str, i64); 10] = [
    ("Felipe", 20),
    ("Thiago", 20),
    ("Henrique", 20),
    ("Luz", 10),
    ("Cecília", 10),
    ("Bruna", 10),
    ("Jorge", 10),
    ("Letícia", 10),
    ("Lucas", 10),
    ("Carolina", 10),
];

const GENERATED_CLIENT_NAMES: [&str; 8] = [
    "João", "Maria", "Carlos", "Sandra", "Pedro", "Amanda", "Roberto", "Fernanda",
];
const GENERATED_CLIENT_SCORES: [i64; 5] = [5, 10, 15, 20, 25];
const GENERATED_CLIENTS: usize = 86;

/// Classified messages per sentiment label
const SENTIMENT_COUNTS: [(&str, u32); 6] = [
    ("Satisfação", 42),
    ("Frustração", 18),
    ("Confusão", 12),
    ("Urgência/Pressão", 9),
    ("Raiva/Irritação", 7),
    ("Neutro", 32),
];

pub const MONTHS: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho", "Julho", "Agosto", "Setembro",
    "Outubro", "Novembro", "Dezembro",
];

const MONTHLY_NEGATIVE: [u32; 12] = [3, 2, 4, 1, 2, 3, 5, 2, 1, 2, 3, 1];
const MONTHLY_POSITIVE: [u32; 12] = [4, 5, 3, 6, 5, 4, 2, 6, 7, 5, 4, 6];
const MONTHLY_NEUTRAL: [u32; 12] = [2, 3, 2, 2, 4, 2, 3, 1, 2, 3, 2, 3];

/// Everything the mock backend serves, ranked lists already in score order
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub attendants: Vec<RankedEntry>,
    pub clients: Vec<RankedEntry>,
    pub performance: PieSeries,
    pub evolution: BarSeries,
}

impl Fixtures {
    /// The default data set
    pub fn sample() -> Self {
        let attendants = ATTENDANTS
            .iter()
            .map(|(name, score)| RankedEntry::new(*name, *score))
            .collect();

        let generated = (0..GENERATED_CLIENTS).map(|i| {
            let name = GENERATED_CLIENT_NAMES[i % GENERATED_CLIENT_NAMES.len()];
            let round = i / GENERATED_CLIENT_NAMES.len() + 1;
            RankedEntry::new(
                format!("{} {}", name, round),
                GENERATED_CLIENT_SCORES[i % GENERATED_CLIENT_SCORES.len()],
            )
        });
        let clients = NAMED_CLIENTS
            .iter()
            .map(|(name, score)| RankedEntry::new(*name, *score))
            .chain(generated)
            .collect();

        Self::new(attendants, clients, performance_from_counts(&SENTIMENT_COUNTS), sample_evolution())
    }

    /// Build fixtures, ordering both rankings by score descending
    pub fn new(
        mut attendants: Vec<RankedEntry>,
        mut clients: Vec<RankedEntry>,
        performance: PieSeries,
        evolution: BarSeries,
    ) -> Self {
        rank(&mut attendants);
        rank(&mut clients);
        Self {
            attendants,
            clients,
            performance,
            evolution,
        }
    }

    /// No entries and no chart data
    pub fn empty() -> Self {
        Self::new(
            Vec::new(),
            Vec::new(),
            performance_from_counts(&[]),
            BarSeries {
                months: Vec::new(),
                negative: Vec::new(),
                positive: Vec::new(),
                neutral: Vec::new(),
            },
        )
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::sample()
    }
}

/// Stable sort, so equal scores keep their insertion order
fn rank(entries: &mut [RankedEntry]) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
}

/// Percentage per label, rounded to one decimal place
pub fn performance_from_counts(counts: &[(&str, u32)]) -> PieSeries {
    let total: u32 = counts.iter().map(|(_, count)| count).sum();

    let values = counts
        .iter()
        .map(|(_, count)| {
            if total == 0 {
                0.0
            } else {
                (f64::from(*count) / f64::from(total) * 1000.0).round() / 10.0
            }
        })
        .collect();

    PieSeries {
        labels: counts.iter().map(|(label, _)| label.to_string()).collect(),
        values,
    }
}

fn sample_evolution() -> BarSeries {
    let to_series = |values: &[u32]| values.iter().map(|v| f64::from(*v)).collect();
    BarSeries {
        months: MONTHS.iter().map(|m| m.to_string()).collect(),
        negative: to_series(&MONTHLY_NEGATIVE),
        positive: to_series(&MONTHLY_POSITIVE),
        neutral: to_series(&MONTHLY_NEUTRAL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_sizes() {
        let fixtures = Fixtures::sample();
        assert_eq!(fixtures.attendants.len(), 12);
        assert_eq!(fixtures.clients.len(), 96);
        assert_eq!(fixtures.performance.labels.len(), 6);
        assert_eq!(fixtures.evolution.len(), 12);
    }

    #[test]
    fn test_rankings_are_descending() {
        let fixtures = Fixtures::sample();
        for list in [&fixtures.attendants, &fixtures.clients] {
            assert!(list.windows(2).all(|w| w[0].score >= w[1].score));
        }
        assert_eq!(fixtures.attendants[0], RankedEntry::new("Henrique", 32));
        assert_eq!(fixtures.attendants[11], RankedEntry::new("Daniel", -25));
    }

    #[test]
    fn test_generated_client_names() {
        let fixtures = Fixtures::sample();
        let names: Vec<_> = fixtures.clients.iter().map(|c| c.name.as_str()).collect();
        assert!(names.contains(&"João 1"));
        assert!(names.contains(&"Fernanda 1"));
        assert!(names.contains(&"Amanda 11"));
        assert!(!names.contains(&"Roberto 11"));
    }

    #[test]
    fn test_performance_percentages() {
        let pie = performance_from_counts(&SENTIMENT_COUNTS);
        assert_eq!(pie.values, vec![35.0, 15.0, 10.0, 7.5, 5.8, 26.7]);
        assert!((pie.total() - 100.0).abs() < 0.05);

        let empty = performance_from_counts(&[("Neutro", 0)]);
        assert_eq!(empty.values, vec![0.0]);
    }

    #[test]
    fn test_monthly_counts_fit_axis() {
        let evolution = sample_evolution();
        assert!(evolution.max_value().unwrap() <= 8.0);
    }
}
