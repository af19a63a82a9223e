use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of upcoming days offered, starting tomorrow.
pub const BOOKING_WINDOW_DAYS: usize = 6;

pub const TIME_SLOTS: [&str; 8] = [
    "9:00 AM", "10:00 AM", "11:00 AM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM", "5:00 PM",
];

/// Only the first slots are shown to visitors.
pub const OFFERED_SLOT_COUNT: usize = 6;

pub const MEETING_SUBJECT: &str = "Meeting Request";

pub fn offered_time_slots() -> &'static [&'static str] {
    &TIME_SLOTS[..OFFERED_SLOT_COUNT]
}

/// Days from `today + 1` through `today + 6`, ascending.
pub fn compute_available_dates(today: NaiveDate) -> Vec<NaiveDate> {
    today.iter_days().skip(1).take(BOOKING_WINDOW_DAYS).collect()
}

/// Long form used in the mail body, e.g. "Friday, June 13, 2025".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    NoSelection,
    DateChosen,
    FullyChosen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentSelection {
    available_dates: Vec<NaiveDate>,
    selected_date: Option<NaiveDate>,
    selected_time: Option<&'static str>,
}

impl AppointmentSelection {
    /// The date window is fixed here and never recomputed for this instance.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            available_dates: compute_available_dates(today),
            selected_date: None,
            selected_time: None,
        }
    }

    pub fn available_dates(&self) -> &[NaiveDate] {
        &self.available_dates
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_time(&self) -> Option<&'static str> {
        self.selected_time
    }

    pub fn phase(&self) -> SelectionPhase {
        match (self.selected_date, self.selected_time) {
            (None, _) => SelectionPhase::NoSelection,
            (Some(_), None) => SelectionPhase::DateChosen,
            (Some(_), Some(_)) => SelectionPhase::FullyChosen,
        }
    }

    /// Replaces the chosen date. Dates outside the window are ignored.
    /// Returns whether the selection changed.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        if !self.available_dates.contains(&date) || self.selected_date == Some(date) {
            return false;
        }
        self.selected_date = Some(date);
        true
    }

    /// Replaces the chosen slot. Ignored until a date is chosen, and for any
    /// label outside the offered slots.
    pub fn select_time(&mut self, time: &str) -> bool {
        if self.selected_date.is_none() {
            return false;
        }
        let Some(slot) = offered_time_slots().iter().find(|s| **s == time) else {
            return false;
        };
        if self.selected_time == Some(*slot) {
            return false;
        }
        self.selected_time = Some(*slot);
        true
    }

    pub fn meeting_request(&self, recipient: &str) -> Option<MeetingRequest> {
        let date = self.selected_date?;
        let time = self.selected_time?;
        Some(build_meeting_request(date, time, recipient))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MeetingRequest {
    pub fn mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body),
        )
    }
}

pub fn build_meeting_request(date: NaiveDate, time: &str, recipient: &str) -> MeetingRequest {
    let body = [
        "Hi,".to_string(),
        String::new(),
        format!(
            "I would like to request a meeting on {} at {}.",
            long_date(date),
            time
        ),
        String::new(),
        "Looking forward to speaking with you.".to_string(),
        String::new(),
        "Best regards".to_string(),
    ]
    .join("\r\n");

    MeetingRequest {
        recipient: recipient.to_string(),
        subject: MEETING_SUBJECT.to_string(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_available_dates_window() {
        let dates = compute_available_dates(ymd(2025, 6, 10));
        let expected: Vec<NaiveDate> = (11..=16).map(|d| ymd(2025, 6, d)).collect();
        assert_eq!(dates, expected);
    }

    #[test]
    fn test_available_dates_cross_month_and_year() {
        let dates = compute_available_dates(ymd(2025, 12, 29));
        assert_eq!(dates.len(), BOOKING_WINDOW_DAYS);
        assert_eq!(dates[0], ymd(2025, 12, 30));
        assert_eq!(dates[2], ymd(2026, 1, 1));
        assert_eq!(dates[5], ymd(2026, 1, 4));

        // consecutive and strictly ascending
        for pair in dates.windows(2) {
            assert_eq!(pair[0].succ_opt(), Some(pair[1]));
        }
    }

    #[test]
    fn test_phase_transitions() {
        let mut sel = AppointmentSelection::new(ymd(2025, 6, 10));
        assert_eq!(sel.phase(), SelectionPhase::NoSelection);

        // time before date is ignored
        assert!(!sel.select_time("10:00 AM"));
        assert_eq!(sel.phase(), SelectionPhase::NoSelection);

        assert!(sel.select_date(ymd(2025, 6, 12)));
        assert_eq!(sel.phase(), SelectionPhase::DateChosen);

        assert!(sel.select_date(ymd(2025, 6, 13)));
        assert_eq!(sel.phase(), SelectionPhase::DateChosen);
        assert_eq!(sel.selected_date(), Some(ymd(2025, 6, 13)));

        assert!(sel.select_time("2:00 PM"));
        assert_eq!(sel.phase(), SelectionPhase::FullyChosen);

        // changing the date keeps the time
        assert!(sel.select_date(ymd(2025, 6, 15)));
        assert_eq!(sel.phase(), SelectionPhase::FullyChosen);
        assert_eq!(sel.selected_time(), Some("2:00 PM"));
    }

    #[test]
    fn test_select_time_last_write_wins() {
        let mut sel = AppointmentSelection::new(ymd(2025, 6, 10));
        sel.select_date(ymd(2025, 6, 11));
        for first in offered_time_slots() {
            for second in offered_time_slots() {
                if first == second {
                    continue;
                }
                sel.select_time(first);
                sel.select_time(second);
                assert_eq!(sel.selected_time(), Some(*second));
            }
        }
    }

    #[test]
    fn test_each_offered_time_selects_once() {
        let mut sel = AppointmentSelection::new(ymd(2025, 6, 10));
        sel.select_date(ymd(2025, 6, 12));
        for &time in offered_time_slots() {
            assert!(sel.select_time(time), "{time} should be selectable");
            assert_eq!(sel.selected_time(), Some(time));
            // clicking the same button again changes nothing
            assert!(!sel.select_time(time));
        }
    }

    #[test]
    fn test_out_of_range_selection_is_noop() {
        let mut sel = AppointmentSelection::new(ymd(2025, 6, 10));

        // today and the seventh day are outside the window
        assert!(!sel.select_date(ymd(2025, 6, 10)));
        assert!(!sel.select_date(ymd(2025, 6, 17)));
        assert_eq!(sel.selected_date(), None);

        sel.select_date(ymd(2025, 6, 11));
        sel.select_time("9:00 AM");

        // hidden slots and unknown labels are rejected
        assert!(!sel.select_time("4:00 PM"));
        assert!(!sel.select_time("5:00 PM"));
        assert!(!sel.select_time("noon"));
        assert_eq!(sel.selected_time(), Some("9:00 AM"));
    }

    #[test]
    fn test_request_requires_both_selections() {
        let recipient = "someone@example.com";
        let mut sel = AppointmentSelection::new(ymd(2025, 6, 10));
        assert!(sel.meeting_request(recipient).is_none());

        sel.select_date(ymd(2025, 6, 13));
        assert!(sel.meeting_request(recipient).is_none());

        sel.select_time("2:00 PM");
        assert!(sel.meeting_request(recipient).is_some());
    }

    #[test]
    fn test_meeting_request_scenario() {
        let mut sel = AppointmentSelection::new(ymd(2025, 6, 10));
        sel.select_date(ymd(2025, 6, 13));
        sel.select_time("2:00 PM");

        let req = sel.meeting_request("someone@example.com").unwrap();
        assert_eq!(req.recipient, "someone@example.com");
        assert_eq!(req.subject, "Meeting Request");
        assert!(req.body.contains("Friday, June 13, 2025"));
        assert!(req.body.contains("2:00 PM"));
        assert!(req.body.contains("\r\n"));

        let uri = req.mailto_uri();
        assert!(uri.starts_with("mailto:someone@example.com?subject=Meeting%20Request&body="));
        assert!(uri.contains("Friday%2C%20June%2013%2C%202025"));
        assert!(uri.contains("2%3A00%20PM"));
        assert!(uri.contains("%0D%0A"));
    }

    #[test]
    fn test_build_meeting_request_is_pure() {
        let a = build_meeting_request(ymd(2025, 1, 1), "10:00 AM", "a@b.c");
        let b = build_meeting_request(ymd(2025, 1, 1), "10:00 AM", "a@b.c");
        assert_eq!(a, b);
        assert_eq!(a.mailto_uri(), b.mailto_uri());
        assert!(a.body.contains("Wednesday, January 1, 2025"));
    }
}
