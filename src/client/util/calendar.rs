//! Visible ranges of the calendar views.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use entity::event;

use crate::client::util::date::DisplayZone;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CalendarView {
    #[default]
    Month,
    Week,
    Day,
}

impl CalendarView {
    pub fn label(self) -> &'static str {
        match self {
            Self::Month => "Mes",
            Self::Week => "Semana",
            Self::Day => "Día",
        }
    }
}

/// Days shown by a view, Monday-first weeks for the month grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibleRange {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl VisibleRange {
    /// Computes the days `view` shows around `anchor`.
    ///
    /// The month view pads the month to whole weeks.
    pub fn new(view: CalendarView, anchor: NaiveDate) -> Self {
        match view {
            CalendarView::Day => Self {
                first: anchor,
                last: anchor,
            },
            CalendarView::Week => {
                let first = week_start(anchor);
                Self {
                    first,
                    last: first + Duration::days(6),
                }
            }
            CalendarView::Month => {
                let month_first = anchor.with_day(1).unwrap_or(anchor);
                let month_last = month_first
                    .checked_add_months(Months::new(1))
                    .and_then(|next| next.pred_opt())
                    .unwrap_or(month_first);
                Self {
                    first: week_start(month_first),
                    last: week_start(month_last) + Duration::days(6),
                }
            }
        }
    }

    /// First instant of the range in `zone`.
    pub fn start(&self, zone: DisplayZone) -> DateTime<Utc> {
        day_start(zone, self.first)
    }

    /// Last instant of the range in `zone`, inclusive.
    pub fn end(&self, zone: DisplayZone) -> DateTime<Utc> {
        day_start(zone, self.last + Duration::days(1)) - Duration::milliseconds(1)
    }

    pub fn days(&self) -> Vec<NaiveDate> {
        self.first
            .iter_days()
            .take_while(|day| *day <= self.last)
            .collect()
    }
}

/// Anchor of the previous (`forward == false`) or next period of `view`.
pub fn step(view: CalendarView, anchor: NaiveDate, forward: bool) -> NaiveDate {
    let stepped = match (view, forward) {
        (CalendarView::Month, true) => anchor.with_day(1).and_then(|d| d.checked_add_months(Months::new(1))),
        (CalendarView::Month, false) => anchor.with_day(1).and_then(|d| d.checked_sub_months(Months::new(1))),
        (CalendarView::Week, true) => anchor.checked_add_signed(Duration::days(7)),
        (CalendarView::Week, false) => anchor.checked_sub_signed(Duration::days(7)),
        (CalendarView::Day, true) => anchor.succ_opt(),
        (CalendarView::Day, false) => anchor.pred_opt(),
    };

    stepped.unwrap_or(anchor)
}

/// Events falling on `day` in `zone`, in the order given.
pub fn events_on(events: &[event::Model], day: NaiveDate, zone: DisplayZone) -> Vec<&event::Model> {
    events
        .iter()
        .filter(|event| zone.day_of(&event.date) == day)
        .collect()
}

/// Midnight of `day` in `zone`, or UTC midnight when a clock change skips it.
fn day_start(zone: DisplayZone, day: NaiveDate) -> DateTime<Utc> {
    zone.day_start(day)
        .unwrap_or_else(|| day.and_time(chrono::NaiveTime::MIN).and_utc())
}

fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(day.weekday().num_days_from_monday() as i64)
}
