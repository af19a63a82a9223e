use chrono::{DateTime, Datelike, Local};
use leptos::prelude::*;
use leptos_meta::Title;

use super::avatar::{Avatar, Gallery, InfoBlock};
use super::calendar::MeetingScheduler;
use super::components::{Card, Eyebrow, Pills, Section};
use super::typing::TypingText;
use crate::profile::{profile, Entry, Profile};

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn HomePage() -> impl IntoView {
    let profile = profile();

    view! {
        <Title text="Portfolio" />
        <Hero profile />
        <About profile />
        <Section id="experience" eyebrow="Experience" title=profile.experience_title.clone()>
            <EntryList entries=profile.experience.clone() columns="grid gap-6" />
        </Section>
        <Section
            id="leadership"
            eyebrow="Leadership & service"
            title=profile.leadership_title.clone()
        >
            <EntryList entries=profile.leadership.clone() columns="grid gap-6 md:grid-cols-2" />
        </Section>
        <Skills profile />
        <Section id="education" eyebrow="Education" title=profile.education_title.clone()>
            <EntryList entries=profile.education.clone() columns="grid gap-6 md:grid-cols-2" />
        </Section>
        <Contact profile />
        <Footer profile />
    }
}

#[component]
fn Hero(profile: &'static Profile) -> impl IntoView {
    view! {
        <section class="py-14 md:py-20">
            <div class="grid items-center gap-10 md:grid-cols-[1.1fr_0.9fr]">
                <div class="fade-up">
                    <Eyebrow text=profile.tagline.clone() />
                    <h1 class="mt-4 text-4xl md:text-5xl font-semibold tracking-tight text-slate-900">
                        <TypingText text=profile.name.clone() />
                    </h1>
                    <p class="mt-3 text-lg text-slate-700">
                        <span class="font-medium text-slate-900">{profile.headline.clone()}</span>
                        <span class="mx-2 text-slate-300">"•"</span>
                        <span class="inline-flex items-center gap-1.5">
                            "📍 " {profile.location.clone()}
                        </span>
                    </p>
                    <p class="mt-5 max-w-xl text-slate-700 leading-relaxed">
                        {profile.intro.clone()}
                    </p>
                    <div class="mt-7 flex flex-wrap items-center gap-3">
                        <a
                            href="#experience"
                            class="inline-flex items-center gap-2 rounded-2xl bg-indigo-600 px-5 py-3 text-sm font-semibold text-white shadow-sm hover:shadow-md hover:bg-indigo-500 transition"
                        >
                            "View Experience →"
                        </a>
                        <a
                            href="#contact"
                            class="inline-flex items-center gap-2 rounded-2xl border border-slate-200 bg-white/70 px-5 py-3 text-sm font-semibold text-slate-900 shadow-sm backdrop-blur hover:shadow-md transition"
                        >
                            "Get in touch"
                        </a>
                        <Pills labels=profile.hero_pills.clone() />
                    </div>
                </div>
                <div class="relative fade-up">
                    <div class="absolute -inset-2 rounded-[28px] bg-gradient-to-br from-indigo-200/50 via-sky-200/30 to-violet-200/50 blur-xl" />
                    <div class="relative overflow-hidden rounded-[28px] border border-slate-200 bg-white/70 shadow-sm backdrop-blur">
                        <Avatar profile />
                        <InfoBlock profile />
                    </div>
                </div>
            </div>
            <Gallery images=profile.gallery_images.clone() />
        </section>
    }
}

#[component]
fn About(profile: &'static Profile) -> impl IntoView {
    let about = &profile.about;
    view! {
        <Section id="about" eyebrow="About" title=about.title.clone()>
            <div class="grid gap-6 md:grid-cols-2">
                <div class="rounded-2xl border border-slate-200 bg-white/70 p-6 shadow-sm backdrop-blur">
                    {about
                        .paragraphs
                        .iter()
                        .map(|p| view! { <p class="mb-4 leading-relaxed text-slate-700">{p.clone()}</p> })
                        .collect_view()}
                    <Pills labels=about.pills.clone() />
                </div>
                <div class="rounded-2xl border border-slate-200 bg-white/70 p-6 shadow-sm backdrop-blur">
                    <h3 class="text-lg font-semibold text-slate-900">{about.aim_title.clone()}</h3>
                    <p class="mt-3 leading-relaxed text-slate-700">{about.aim_text.clone()}</p>
                    <div class="mt-5 grid gap-3 sm:grid-cols-2">
                        {about
                            .traits
                            .iter()
                            .map(|t| {
                                view! {
                                    <div class="rounded-2xl border border-slate-200 bg-white p-4">
                                        <div class="text-xs text-slate-500">{t.label.clone()}</div>
                                        <div class="mt-1 text-sm font-semibold">{t.value.clone()}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Section>
    }
}

#[component]
fn EntryList(entries: Vec<Entry>, columns: &'static str) -> impl IntoView {
    view! {
        <div class=columns>
            {entries.into_iter().map(|entry| view! { <EntryCard entry /> }).collect_view()}
        </div>
    }
}

#[component]
fn EntryCard(entry: Entry) -> impl IntoView {
    let Entry { icon, title, subtitle, badge, bullets, text } = entry;
    view! {
        <Card icon title subtitle badge>
            {(!bullets.is_empty())
                .then(|| {
                    view! {
                        <ul class="list-disc pl-5 space-y-2">
                            {bullets.into_iter().map(|b| view! { <li>{b}</li> }).collect_view()}
                        </ul>
                    }
                })}
            {text.map(|t| view! { <p class="leading-relaxed">{t}</p> })}
        </Card>
    }
}

#[component]
fn Skills(profile: &'static Profile) -> impl IntoView {
    view! {
        <Section id="skills" eyebrow="Skills" title=profile.skills_title.clone()>
            <div class="grid gap-6 md:grid-cols-3">
                {profile
                    .skills
                    .iter()
                    .map(|group| {
                        view! {
                            <Card
                                icon=group.icon
                                title=group.title.clone()
                                subtitle=group.subtitle.clone()
                            >
                                <Pills labels=group.skills.clone() />
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn Contact(profile: &'static Profile) -> impl IntoView {
    let contact = &profile.contact;
    view! {
        <Section id="contact" eyebrow="Contact" title=contact.title.clone()>
            <div class="rounded-3xl border border-slate-200 bg-white/70 p-7 shadow-sm backdrop-blur">
                <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-6">
                    <div>
                        <h3 class="text-lg font-semibold text-slate-900">
                            {contact.heading.clone()}
                        </h3>
                        <p class="mt-2 text-slate-700">
                            "Based in " {profile.location.clone()} ". " {contact.text.clone()}
                        </p>
                    </div>
                    <div class="flex flex-wrap items-center gap-3">
                        <a
                            href=profile.linkedin_href.clone()
                            target="_blank"
                            rel="noreferrer"
                            class="inline-flex items-center gap-2 rounded-2xl border border-slate-200 bg-white px-5 py-3 text-sm font-semibold text-slate-900 shadow-sm hover:shadow-md transition"
                        >
                            "LinkedIn"
                        </a>
                        <a
                            href=profile.cv_href.clone()
                            class="inline-flex items-center gap-2 rounded-2xl bg-slate-900 px-5 py-3 text-sm font-semibold text-white shadow-sm hover:shadow-md hover:bg-slate-800 transition"
                        >
                            "⬇ Download CV"
                        </a>
                    </div>
                </div>
                <div class="mt-8">
                    <MeetingScheduler
                        link=profile.scheduling_link.clone()
                        recipient=profile.contact_email.clone()
                    />
                </div>
            </div>
        </Section>
    }
}

fn build_date() -> Option<String> {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .ok()
        .map(|t| t.format("%b %-d, %Y").to_string())
}

#[component]
fn Footer(profile: &'static Profile) -> impl IntoView {
    let year = Local::now().year();
    view! {
        <footer class="pb-10 pt-4 text-center text-xs text-slate-500">
            {format!("© {year} {}. Built with Rust + Leptos.", profile.name)}
            {build_date().map(|date| view! { <span class="ml-1">"Updated " {date} "."</span> })}
        </footer>
    }
}
