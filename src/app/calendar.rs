use chrono::{Local, NaiveDate};
use leptos::{either::Either, prelude::*};

use crate::appointment::{long_date, offered_time_slots, AppointmentSelection};
use crate::scheduling::{scheduler_mode, SchedulerMode, EMBED_HEIGHT_PX, EMBED_WIDTH};

const OPTION_IDLE: &str = "rounded-xl border border-slate-200 bg-white px-3 py-2 text-sm text-slate-800 hover:shadow-md transition";
const OPTION_SELECTED: &str = "rounded-xl border border-indigo-600 bg-indigo-600 px-3 py-2 text-sm text-white shadow-sm transition";

fn option_class(selected: bool) -> &'static str {
    if selected {
        OPTION_SELECTED
    } else {
        OPTION_IDLE
    }
}

/// External booking page when one is configured, the local picker otherwise.
#[component]
pub fn MeetingScheduler(
    #[prop(into)] link: String,
    #[prop(into)] recipient: String,
) -> impl IntoView {
    match scheduler_mode(&link) {
        SchedulerMode::Embed => Either::Left(view! {
            <iframe
                src=link
                width=EMBED_WIDTH
                height=EMBED_HEIGHT_PX.to_string()
                title="Schedule a meeting"
                class="w-full rounded-2xl border border-slate-200 bg-white"
            ></iframe>
        }),
        SchedulerMode::LocalPicker => Either::Right(view! { <DefaultCalendar recipient /> }),
    }
}

#[component]
pub fn DefaultCalendar(#[prop(into)] recipient: String) -> impl IntoView {
    let selection = RwSignal::new(AppointmentSelection::new(Local::now().date_naive()));
    let dates = selection.with_untracked(|s| s.available_dates().to_vec());

    let has_date = move || selection.with(|s| s.selected_date().is_some());
    let summary = move || {
        selection.with(|s| match (s.selected_date(), s.selected_time()) {
            (Some(date), Some(time)) => format!("{} at {}", long_date(date), time),
            (Some(date), None) => long_date(date),
            _ => String::new(),
        })
    };

    view! {
        <div class="rounded-2xl border border-slate-200 bg-white/70 p-6 shadow-sm backdrop-blur">
            <h4 class="text-sm font-semibold text-slate-900">"Pick a day"</h4>
            <div class="mt-3 grid grid-cols-3 sm:grid-cols-6 gap-2">
                {dates
                    .into_iter()
                    .map(|date| view! { <DateOption date selection /> })
                    .collect_view()}
            </div>
            <Show when=has_date>
                <h4 class="mt-6 text-sm font-semibold text-slate-900">"Pick a time"</h4>
                <div class="mt-3 grid grid-cols-3 gap-2">
                    {offered_time_slots()
                        .iter()
                        .map(|&time| view! { <TimeOption time selection /> })
                        .collect_view()}
                </div>
            </Show>
            <p class="mt-4 text-sm text-slate-600">{summary}</p>
            {move || {
                selection
                    .with(|s| s.meeting_request(&recipient))
                    .map(|request| {
                        view! {
                            <a
                                href=request.mailto_uri()
                                class="mt-4 inline-flex items-center gap-2 rounded-2xl bg-indigo-600 px-5 py-3 text-sm font-semibold text-white shadow-sm hover:shadow-md hover:bg-indigo-500 transition"
                            >
                                "📅 Request meeting"
                            </a>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn DateOption(date: NaiveDate, selection: RwSignal<AppointmentSelection>) -> impl IntoView {
    let selected = move || selection.with(|s| s.selected_date() == Some(date));
    view! {
        <button
            type="button"
            class=move || option_class(selected())
            on:click=move |_| {
                selection
                    .maybe_update(|s| {
                        let changed = s.select_date(date);
                        if changed {
                            log::debug!("appointment date selected: {date}");
                        }
                        changed
                    });
            }
        >
            <div class="text-xs opacity-80">{date.format("%a").to_string()}</div>
            <div class="text-lg font-semibold">{date.format("%-d").to_string()}</div>
            <div class="text-xs opacity-80">{date.format("%b").to_string()}</div>
        </button>
    }
}

#[component]
fn TimeOption(time: &'static str, selection: RwSignal<AppointmentSelection>) -> impl IntoView {
    let selected = move || selection.with(|s| s.selected_time() == Some(time));
    view! {
        <button
            type="button"
            class=move || option_class(selected())
            on:click=move |_| {
                selection
                    .maybe_update(|s| {
                        let changed = s.select_time(time);
                        if changed {
                            log::debug!("appointment time selected: {time}");
                        }
                        changed
                    });
            }
        >
            {time}
        </button>
    }
}
