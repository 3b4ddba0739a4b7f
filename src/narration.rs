//! Human-readable sentences for each summary.
//!
//! Every sentence embeds a scope clause describing the filter ("during March
//! on a Monday in Chicago"). The clause wording depends only on which of
//! month and weekday are wildcarded, so each clause family is a table keyed
//! by [`Wildcards`].

use crate::analyzers::types::{
    Demographics, DurationBreakdown, DurationSummary, GroupCount, Report, Stat, StationSummary,
    TimeSummary, Timed, UserSummary,
};
use crate::filter::{FilterSpec, Wildcards, month_name};

/// Clause templates for the four wildcard cases.
///
/// `{city}`, `{month}` and `{day}` are replaced with title-cased names.
struct Clauses {
    both: &'static str,
    month_only: &'static str,
    day_only: &'static str,
    neither: &'static str,
}

impl Clauses {
    fn pick(&self, wildcards: Wildcards) -> &'static str {
        match wildcards {
            Wildcards::Both => self.both,
            Wildcards::MonthOnly => self.month_only,
            Wildcards::DayOnly => self.day_only,
            Wildcards::Neither => self.neither,
        }
    }

    fn fill(&self, spec: &FilterSpec) -> String {
        let month = spec.month.pinned().map(|m| m.title()).unwrap_or_default();
        let day = spec.weekday.pinned().map(|d| d.title()).unwrap_or_default();
        self.pick(spec.wildcards())
            .replace("{city}", spec.city.title())
            .replace("{month}", month)
            .replace("{day}", day)
    }
}

const PERIOD: Clauses = Clauses {
    both: "during all months across weekdays in {city}",
    month_only: "on a {day} in {city}",
    day_only: "during {month} in {city}",
    neither: "during {month} on a {day} in {city}",
};

const MONTH_MODE_PERIOD: Clauses = Clauses {
    both: "on all days in {city}",
    ..PERIOD
};

const DAY_MODE_PERIOD: Clauses = Clauses {
    both: "during all months in {city}",
    ..PERIOD
};

const BIRTH_PERIOD: Clauses = Clauses {
    both: "during all months across weekdays in {city}",
    month_only: "in {city} on a {day}",
    day_only: "in {city} during {month}",
    neither: "in {city} during {month} on a {day}",
};

const SECTION_RULE_WIDTH: usize = 40;

fn no_data(spec: &FilterSpec, what: &str) -> String {
    format!(
        "No trips with shared bikes {} were found, so the {what} cannot be determined",
        PERIOD.fill(spec)
    )
}

fn format_breakdown(b: &DurationBreakdown) -> String {
    format!(
        "{} day(s), {} hour(s), {} minute(s), {} second(s)",
        b.days, b.hours, b.minutes, b.seconds
    )
}

/// Two-column table of group names and their trip counts.
fn format_counts(label: &str, counts: &[GroupCount]) -> String {
    const COUNT_HEADER: &str = "Total_Numbers";
    let width = counts
        .iter()
        .map(|g| g.name.chars().count())
        .chain([label.chars().count()])
        .max()
        .unwrap_or_default();

    let mut lines = vec![format!("{label:<width$}  {COUNT_HEADER}")];
    lines.extend(counts.iter().map(|g| {
        format!(
            "{:<width$}  {:>count_width$}",
            g.name,
            g.count,
            count_width = COUNT_HEADER.len()
        )
    }));
    lines.join("\n")
}

pub fn render_time(summary: &TimeSummary, spec: &FilterSpec) -> String {
    let month = match &summary.month {
        Stat::Computed(m) => format!(
            "The most common month for sharing bikes {} is {}",
            MONTH_MODE_PERIOD.fill(spec),
            month_name(*m).map_or_else(|| m.to_string(), str::to_string)
        ),
        Stat::Suppressed => "It is meaningless to search for the most common month as a month \
                             has been specified for filtering!"
            .to_string(),
        Stat::NoData => no_data(spec, "most common month"),
    };

    let weekday = match &summary.weekday {
        Stat::Computed(d) => format!(
            "The most common day for sharing bikes {} is {d}",
            DAY_MODE_PERIOD.fill(spec)
        ),
        Stat::Suppressed => "It is meaningless to search for the most common weekday as a day \
                             has been specified for filtering!"
            .to_string(),
        Stat::NoData => no_data(spec, "most common day"),
    };

    let hour = match &summary.hour {
        Stat::Computed(h) => format!(
            "The most common hour for sharing bikes {} is {h}",
            PERIOD.fill(spec)
        ),
        Stat::Suppressed | Stat::NoData => no_data(spec, "most common hour"),
    };

    [month, weekday, hour].join("\n")
}

pub fn render_stations(summary: &StationSummary, spec: &FilterSpec) -> String {
    let period = PERIOD.fill(spec);

    let station = |stat: &Stat<String>, kind: &str| match stat {
        Stat::Computed(name) => format!(
            "The most common {kind} station for trips with shared bikes {period} is {name}"
        ),
        Stat::Suppressed | Stat::NoData => no_data(spec, &format!("most common {kind} station")),
    };

    let trip = match &summary.trip {
        Stat::Computed(pair) => {
            let subject = match spec.wildcards() {
                Wildcards::Both => "start- and end station combination",
                Wildcards::MonthOnly | Wildcards::DayOnly | Wildcards::Neither => {
                    "start- and end station"
                }
            };
            format!(
                "The most common {subject} for trips with shared bikes {period} is from {} to {}",
                pair.start, pair.end
            )
        }
        Stat::Suppressed | Stat::NoData => no_data(spec, "most common trip"),
    };

    [
        station(&summary.start_station, "starting"),
        station(&summary.end_station, "end"),
        trip,
    ]
    .join("\n")
}

pub fn render_duration(summary: &DurationSummary, spec: &FilterSpec) -> String {
    let period = PERIOD.fill(spec);

    [(&summary.total, "total"), (&summary.mean, "average")]
        .into_iter()
        .map(|(stat, kind)| match stat {
            Stat::Computed(t) => format!(
                "The {kind} travel time of trips with shared bikes {period} is {}",
                format_breakdown(&t.breakdown)
            ),
            Stat::Suppressed | Stat::NoData => no_data(spec, &format!("{kind} travel time")),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_users(summary: &UserSummary, spec: &FilterSpec) -> String {
    let period = PERIOD.fill(spec);

    let counted = |stat: &Stat<Vec<GroupCount>>, what: &str, label: &str| match stat {
        Stat::Computed(counts) => format!(
            "The following {what} were counted while analysing trips with shared bikes \
             {period}: \n \n {}",
            format_counts(label, counts)
        ),
        Stat::Suppressed | Stat::NoData => no_data(spec, what),
    };

    let mut lines = vec![counted(&summary.user_types, "user types", "User Type")];

    match &summary.demographics {
        Demographics::Unavailable => lines.push(format!(
            "No information on gender and date of birth available in the dataset for {}",
            spec.city.title()
        )),
        Demographics::Available {
            genders,
            birth_years,
        } => {
            lines.push(counted(genders, "genders", "Gender"));
            lines.push(match birth_years {
                Stat::Computed(years) => format!(
                    "The youngest customer renting a bike {} was borne in {}, the oldest in {} \
                     and the most customers were born in {}",
                    BIRTH_PERIOD.fill(spec),
                    years.latest,
                    years.earliest,
                    years.most_common
                ),
                Stat::Suppressed | Stat::NoData => no_data(spec, "birth years"),
            });
        }
    }

    lines.join("\n")
}

fn section<T>(title: &str, timed: &Timed<T>, body: String) -> String {
    format!(
        "\n{title}...\n\n{body}\n\nThis took {} seconds.\n{}",
        timed.elapsed_secs,
        "-".repeat(SECTION_RULE_WIDTH)
    )
}

/// Renders all four summaries with their section headers and timings.
pub fn render_report(report: &Report) -> String {
    let spec = &report.spec;
    [
        section(
            "Calculating The Most Frequent Times of Travel",
            &report.time,
            render_time(&report.time.value, spec),
        ),
        section(
            "Calculating The Most Popular Stations and Trip",
            &report.stations,
            render_stations(&report.stations.value, spec),
        ),
        section(
            "Calculating Trip Duration",
            &report.duration,
            render_duration(&report.duration.value, spec),
        ),
        section(
            "Calculating User Stats",
            &report.users,
            render_users(&report.users.value, spec),
        ),
    ]
    .join("\n")
}
