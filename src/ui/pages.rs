//! Page bodies. Each returns the markup placed inside `<main>`.

use super::components::{
    ButtonSize, ButtonVariant, button_classes, card, icons, link_button, section_heading,
};
use super::escape_html;
use super::{chat, contact, symptoms};
use crate::contact::ContactState;
use crate::session::ChatState;
use crate::symptoms::SymptomSelection;

const HERO_IMAGE: &str = "https://plus.unsplash.com/premium_photo-1661764878654-3d0fc2eefcca?q=80&amp;w=2574&amp;auto=format&amp;fit=crop";

fn unsplash(photo: &str, width: u32) -> String {
    format!(
        "https://images.unsplash.com/{photo}?ixlib=rb-1.2.1&amp;auto=format&amp;fit=crop&amp;w={width}&amp;q=80"
    )
}

/// Tabs of the About page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AboutTab {
    #[default]
    Mission,
    Team,
    Values,
}

impl AboutTab {
    pub const ALL: [Self; 3] = [Self::Mission, Self::Team, Self::Values];

    /// Unknown or missing values fall back to the first tab.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("team") => Self::Team,
            Some("values") => Self::Values,
            _ => Self::Mission,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Mission => "mission",
            Self::Team => "team",
            Self::Values => "values",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Mission => "Our Mission",
            Self::Team => "Our Team",
            Self::Values => "Our Values",
        }
    }
}

/// Tabs of the Dashboard page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Assistant,
    Health,
    Appointments,
    Records,
}

impl DashboardTab {
    pub const ALL: [Self; 4] = [
        Self::Assistant,
        Self::Health,
        Self::Appointments,
        Self::Records,
    ];

    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("health") => Self::Health,
            Some("appointments") => Self::Appointments,
            Some("records") => Self::Records,
            _ => Self::Assistant,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Assistant => "assistant",
            Self::Health => "health",
            Self::Appointments => "appointments",
            Self::Records => "records",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Assistant => "AI Assistant",
            Self::Health => "Health Metrics",
            Self::Appointments => "Appointments",
            Self::Records => "Records",
        }
    }
}

/// Tab strip of links; the active tab is marked with `aria-selected`.
fn tab_strip<'a>(path: &str, tabs: impl Iterator<Item = (&'a str, &'a str, bool)>) -> String {
    let links: String = tabs
        .map(|(slug, label, active)| {
            let state = if active {
                "bg-white text-health-700 shadow-sm"
            } else {
                "text-gray-600 hover:text-gray-900"
            };
            format!(
                r#"<a href="{path}?tab={slug}" role="tab" aria-selected="{active}" class="rounded-md px-4 py-2 text-sm font-medium transition-colors {state}">{label}</a>"#
            )
        })
        .collect();
    format!(
        r#"<div role="tablist" class="mb-8 inline-flex flex-wrap gap-1 rounded-lg bg-gray-100 p-1">{links}</div>"#
    )
}

// ── Landing ─────────────────────────────────────────────────────────────

const STATS: [(&str, &str); 4] = [
    ("8,000+", "Patients Helped"),
    ("98%", "Satisfaction Rate"),
    ("100+", "Health Professionals"),
    ("24/7", "Support Available"),
];

const FEATURES: [(&str, &str); 6] = [
    (
        "Advanced Symptom Analysis",
        "Our intelligent system analyzes your symptoms to provide accurate insights about potential conditions.",
    ),
    (
        "Expert Consultations",
        "Connect directly with qualified healthcare professionals for personalized medical advice.",
    ),
    (
        "Mental Health Support",
        "Access resources and consultations focused on improving your mental wellbeing.",
    ),
    (
        "Private & Secure",
        "Your health information is protected with enterprise-grade security and strict privacy controls.",
    ),
    (
        "Health Monitoring",
        "Track your health metrics over time and receive personalized recommendations.",
    ),
    (
        "Easy Scheduling",
        "Book appointments with healthcare providers at times that work for your schedule.",
    ),
];

struct Testimonial {
    name: &'static str,
    photo: &'static str,
    content: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        photo: "photo-1494790108377-be9c29b29330",
        content: "The consultation service was incredibly helpful. The doctor was attentive and provided clear explanations about my condition.",
    },
    Testimonial {
        name: "Michael Chen",
        photo: "photo-1500648767791-00dcc994a43e",
        content: "I was feeling anxious about my symptoms, but after the consultation I felt reassured. The follow-up care was exceptional.",
    },
    Testimonial {
        name: "Emily Rodriguez",
        photo: "photo-1580489944761-15a19d654956",
        content: "The convenience of getting expert medical advice from home was amazing. I received a comprehensive treatment plan within hours.",
    },
];

fn feature_icon(index: usize) -> String {
    let class = "h-8 w-8 text-health-600";
    match index {
        0 => icons::activity(class),
        1 => icons::users(class),
        2 => icons::brain(class),
        3 => icons::shield(class),
        4 => icons::heart(class),
        _ => icons::calendar(class),
    }
}

pub fn landing() -> String {
    let stats: String = STATS
        .iter()
        .map(|(value, label)| {
            format!(
                r#"<div class="text-center"><p class="text-3xl font-bold text-health-600">{value}</p><p class="text-gray-600">{label}</p></div>"#
            )
        })
        .collect();

    let features: String = FEATURES
        .iter()
        .enumerate()
        .map(|(i, (title, description))| {
            card(
                "p-6 flex flex-col items-center text-center",
                &format!(
                    r#"<div class="mb-4 rounded-full bg-health-50 p-3">{icon}</div><h3 class="mb-2 text-xl font-semibold">{title}</h3><p class="text-gray-600">{description}</p>"#,
                    icon = feature_icon(i),
                    title = escape_html(title),
                ),
            )
        })
        .collect();

    let testimonials: String = TESTIMONIALS
        .iter()
        .map(|t| {
            let stars: String = (0..5)
                .map(|_| icons::star("h-4 w-4 fill-yellow-400 text-yellow-400"))
                .collect();
            card(
                "p-6",
                &format!(
                    r#"<div class="mb-4 flex items-center gap-4"><img src="{src}" alt="{name}" class="h-12 w-12 rounded-full object-cover"><div><h4 class="font-semibold">{name}</h4><p class="text-sm text-gray-500">Patient</p></div></div><div class="mb-3 flex">{stars}</div><p class="italic text-gray-600">"{content}"</p>"#,
                    src = unsplash(t.photo, 200),
                    name = t.name,
                    content = t.content,
                ),
            )
        })
        .collect();

    format!(
        r#"<section class="bg-gradient-to-b from-health-50 to-white">
    <div class="container mx-auto grid items-center gap-12 px-4 py-20 md:grid-cols-2 md:px-6">
        <div>
            <h1 class="mb-6 text-4xl font-bold leading-tight text-gray-900 md:text-5xl">Your Health Journey <span class="text-health-600">Starts Here</span></h1>
            <p class="mb-8 text-xl text-gray-600">Personalized health consultations and insights delivered by experienced healthcare professionals at your fingertips.</p>
            <div class="flex flex-wrap gap-4">{get_started}{sign_in}</div>
        </div>
        <img src="{HERO_IMAGE}" alt="Doctor consulting with patient" class="w-full rounded-2xl object-cover shadow-xl">
    </div>
</section>
<section class="border-y border-gray-100 py-12">
    <div class="container mx-auto grid grid-cols-2 gap-8 px-4 md:grid-cols-4 md:px-6">{stats}</div>
</section>
<section class="py-20">
    <div class="container mx-auto px-4 md:px-6">
        {services_heading}
        <div class="grid gap-8 md:grid-cols-3">{features}</div>
    </div>
</section>
<section class="bg-gray-50 py-20">
    <div class="container mx-auto px-4 md:px-6">
        {testimonials_heading}
        <div class="grid gap-8 md:grid-cols-3">{testimonials}</div>
    </div>
</section>
<section class="py-20 text-center">
    <div class="container mx-auto px-4 md:px-6">
        <h2 class="mb-4 text-3xl font-bold text-gray-900">Ready to Take Control of Your Health?</h2>
        <p class="mx-auto mb-8 max-w-2xl text-xl text-gray-600">Join thousands of satisfied patients who have transformed their health journey with our guidance.</p>
        {cta}
    </div>
</section>"#,
        get_started = link_button("/consultation", "Get Started", ButtonVariant::Primary, ButtonSize::Lg),
        sign_in = link_button("/login", "Sign In", ButtonVariant::Outline, ButtonSize::Lg),
        services_heading = section_heading(
            "Comprehensive Health Services",
            "We provide a range of health services designed to address your unique needs with personalized care and expert guidance.",
        ),
        testimonials_heading = section_heading(
            "What Our Patients Say",
            "Thousands of people have trusted us with their health concerns. Here's what some of them have to say.",
        ),
        cta = link_button(
            "/consultation",
            "Start Your Consultation",
            ButtonVariant::Primary,
            ButtonSize::Lg
        ),
    )
}

// ── About ───────────────────────────────────────────────────────────────

const MISSION_SECTIONS: [(&str, &str); 4] = [
    (
        "Our Mission",
        "At HealthConsult, our mission is to make quality healthcare accessible to everyone, everywhere. We leverage technology to bridge the gap between patients and healthcare professionals, providing timely, accurate, and personalized medical consultations.",
    ),
    (
        "Our Story",
        "Founded in 2020, HealthConsult began as a response to the global pandemic that highlighted the need for remote healthcare solutions. What started as a small team of doctors and engineers has grown into a comprehensive platform serving thousands of patients daily.",
    ),
    (
        "Our Approach",
        "We combine cutting-edge technology with human expertise to deliver healthcare consultations that are both efficient and empathetic. Our AI-powered symptom analysis works alongside experienced medical professionals to ensure you receive accurate information and personalized care.",
    ),
    (
        "Patient-Centered Care",
        "Everything we do is centered around you, the patient. We prioritize your comfort, privacy, and wellbeing in every interaction. Our platform is designed to be intuitive, accessible, and supportive throughout your health journey.",
    ),
];

struct TeamMember {
    name: &'static str,
    role: &'static str,
    photo: &'static str,
    education: &'static str,
    specialization: &'static str,
}

const TEAM: [TeamMember; 6] = [
    TeamMember {
        name: "Dr. Sarah Johnson",
        role: "Chief Medical Officer",
        photo: "photo-1559839734-2b71ea197ec2",
        education: "MD, Harvard Medical School",
        specialization: "Internal Medicine",
    },
    TeamMember {
        name: "Dr. Michael Chen",
        role: "Head of Cardiology",
        photo: "photo-1612349317150-e413f6a5b16d",
        education: "MD, Johns Hopkins University",
        specialization: "Cardiology",
    },
    TeamMember {
        name: "Dr. Emily Rodriguez",
        role: "Head of Pediatrics",
        photo: "photo-1594824476967-48c8b964273f",
        education: "MD, University of California",
        specialization: "Pediatrics",
    },
    TeamMember {
        name: "Dr. James Wilson",
        role: "Chief Technology Officer",
        photo: "photo-1537368910025-700350fe46c7",
        education: "PhD, MIT",
        specialization: "AI & Healthcare",
    },
    TeamMember {
        name: "Dr. Sophia Park",
        role: "Head of Psychiatry",
        photo: "photo-1551836022-d5d88e9218df",
        education: "MD, Stanford University",
        specialization: "Psychiatry",
    },
    TeamMember {
        name: "Dr. Robert Taylor",
        role: "Head of Research",
        photo: "photo-1622253692010-333f2da6031d",
        education: "MD, PhD, Yale University",
        specialization: "Preventive Medicine",
    },
];

const VALUES: [(&str, &str); 6] = [
    (
        "Excellence",
        "We strive for excellence in everything we do, from our technology to our patient interactions.",
    ),
    (
        "Compassion",
        "We approach every patient with empathy and understanding, recognizing that healthcare is deeply personal.",
    ),
    (
        "Innovation",
        "We continuously seek new ways to improve healthcare delivery through technology and creative thinking.",
    ),
    (
        "Integrity",
        "We maintain the highest ethical standards in all our practices, prioritizing honesty and transparency.",
    ),
    (
        "Accessibility",
        "We believe healthcare should be accessible to everyone, regardless of location or circumstance.",
    ),
    (
        "Diversity",
        "We celebrate diversity in our team and patients, recognizing that different perspectives enhance our care.",
    ),
];

const ABOUT_STATS: [(&str, &str); 4] = [
    ("100+", "Medical Experts"),
    ("50k+", "Consultations"),
    ("24/7", "Availability"),
    ("15+", "Specializations"),
];

fn about_tab_body(tab: AboutTab) -> String {
    match tab {
        AboutTab::Mission => {
            let sections: String = MISSION_SECTIONS
                .iter()
                .map(|(title, body)| {
                    card(
                        "p-6",
                        &format!(
                            r#"<div class="mb-4 w-fit rounded-full bg-health-50 p-3">{icon}</div><h3 class="mb-2 text-xl font-medium text-gray-800">{title}</h3><p class="text-gray-600">{body}</p>"#,
                            icon = icons::heart("h-6 w-6 text-health-600"),
                        ),
                    )
                })
                .collect();
            format!(r#"<div class="grid gap-6 md:grid-cols-2">{sections}</div>"#)
        }
        AboutTab::Team => {
            let members: String = TEAM
                .iter()
                .map(|m| {
                    card(
                        "overflow-hidden",
                        &format!(
                            r#"<div class="relative"><img src="{src}" alt="{name}" class="h-64 w-full object-cover"><div class="absolute inset-x-0 bottom-0 bg-gradient-to-t from-black/70 p-4 text-white"><p class="text-sm font-light">{education}</p><p class="text-xs opacity-80">{specialization}</p></div></div><div class="p-4"><h3 class="text-lg font-semibold">{name}</h3><p class="text-sm text-gray-500">{role}</p></div>"#,
                            src = unsplash(m.photo, 800),
                            name = m.name,
                            education = m.education,
                            specialization = escape_html(m.specialization),
                            role = m.role,
                        ),
                    )
                })
                .collect();
            format!(
                r#"<h2 class="mb-8 text-center text-2xl font-semibold">Meet Our Experts</h2><div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">{members}</div>"#
            )
        }
        AboutTab::Values => {
            let values: String = VALUES
                .iter()
                .map(|(title, body)| {
                    format!(
                        r#"<div class="rounded-lg bg-gray-50 p-6"><div class="mb-2 flex items-center gap-2">{check}<h3 class="text-lg font-semibold">{title}</h3></div><p class="text-gray-600">{body}</p></div>"#,
                        check = icons::check("h-5 w-5 text-health-600"),
                    )
                })
                .collect();
            format!(
                r#"<div class="mb-8 text-center"><h2 class="mb-4 text-2xl font-semibold">Our Core Values</h2><p class="text-gray-600">These principles guide every decision we make and every service we provide.</p></div><div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">{values}</div>"#
            )
        }
    }
}

pub fn about(tab: AboutTab) -> String {
    let tabs = tab_strip(
        "/about",
        AboutTab::ALL
            .iter()
            .map(|t| (t.slug(), t.label(), *t == tab)),
    );
    let stats: String = ABOUT_STATS
        .iter()
        .map(|(value, label)| {
            format!(
                r#"<div class="rounded-lg bg-white p-6 text-center shadow-sm"><p class="text-4xl font-bold text-health-600">{value}</p><span class="text-gray-600">{label}</span></div>"#
            )
        })
        .collect();

    format!(
        r#"<div class="container mx-auto px-4 py-16 md:px-6">
    <div class="mb-12 text-center">
        <h1 class="mb-4 text-4xl font-bold text-gray-900">About HealthConsult</h1>
        <p class="mx-auto max-w-3xl text-xl text-gray-600">Committed to revolutionizing healthcare through technology and compassion.</p>
    </div>
    <div class="text-center">{tabs}</div>
    <div id="about-{slug}" role="tabpanel">{body}</div>
    <div class="mt-16 rounded-xl bg-health-50 p-8 text-center">
        <div class="mb-4 flex justify-center">{stethoscope}</div>
        <h2 class="mb-2 text-2xl font-semibold">Join Our Mission</h2>
        <p class="mx-auto mb-6 max-w-2xl text-gray-600">We're always looking for talented medical professionals and technologists who are passionate about transforming healthcare.</p>
        <a href="/about?tab=team" class="{button}">View Career Opportunities</a>
    </div>
    <section class="mt-16">
        <h2 class="mb-12 text-center text-3xl font-semibold">HealthConsult in Numbers</h2>
        <div class="grid grid-cols-2 gap-6 md:grid-cols-4">{stats}</div>
    </section>
</div>"#,
        slug = tab.slug(),
        body = about_tab_body(tab),
        stethoscope = icons::activity("h-12 w-12 text-health-600"),
        button = button_classes(ButtonVariant::Primary, ButtonSize::Md),
    )
}

// ── Contact ─────────────────────────────────────────────────────────────

const FAQS: [(&str, &str); 5] = [
    (
        "How does the online consultation work?",
        "Our online consultations connect you with licensed healthcare professionals through secure video calls. You can describe your symptoms, ask questions, and receive medical advice, all from the comfort of your home.",
    ),
    (
        "Is my medical information secure?",
        "Yes, we take your privacy seriously. HealthConsult is HIPAA compliant and uses end-to-end encryption to protect your personal and medical information.",
    ),
    (
        "Can I get prescriptions through HealthConsult?",
        "In many cases, yes. Our doctors can prescribe medications when medically necessary. However, there are some limitations on prescribing controlled substances, which vary by state.",
    ),
    (
        "What types of medical conditions can be treated through HealthConsult?",
        "We can help with a wide range of non-emergency conditions, including cold and flu, allergies, skin conditions, minor infections, and more. For emergencies, please call 911 or go to your nearest emergency room.",
    ),
    (
        "How much does a consultation cost?",
        "Our consultation fees vary depending on the type of service and your insurance coverage. We provide transparent pricing before you book an appointment, and many insurance plans cover our services.",
    ),
];

const CONTACT_CARDS: [(&str, &str, &str); 3] = [
    (
        "General Inquiries",
        "Have questions about our services or how HealthConsult works?",
        "Email Us",
    ),
    (
        "Schedule a Demo",
        "See how HealthConsult can help your organization deliver better care.",
        "Book Now",
    ),
    (
        "Support",
        "Need technical assistance or have issues with your account?",
        "Get Support",
    ),
];

fn contact_info(icon: String, title: &str, body: &str) -> String {
    format!(
        r#"<div class="flex gap-4"><div class="rounded-full bg-health-50 p-3 h-fit">{icon}</div><div><h3 class="font-medium text-gray-900">{title}</h3><div class="mt-1 text-gray-600">{body}</div></div></div>"#
    )
}

pub fn contact(session_id: &str, state: &ContactState) -> String {
    let cards: String = CONTACT_CARDS
        .iter()
        .enumerate()
        .map(|(i, (title, body, action))| {
            let icon = match i {
                0 => icons::message("h-8 w-8 text-health-600"),
                1 => icons::calendar("h-8 w-8 text-health-600"),
                _ => icons::info("h-8 w-8 text-health-600"),
            };
            card(
                "flex flex-col p-6",
                &format!(
                    r#"<div class="mb-4">{icon}</div><h3 class="mb-2 text-lg font-semibold">{title}</h3><p class="mb-6 text-gray-600">{body}</p>{button}"#,
                    button = link_button(
                        "mailto:info@healthconsult.com",
                        action,
                        ButtonVariant::Outline,
                        ButtonSize::Md
                    ),
                ),
            )
        })
        .collect();

    let faqs: String = FAQS
        .iter()
        .map(|(question, answer)| {
            format!(
                r#"<details class="group border-b border-gray-100 last:border-0"><summary class="flex cursor-pointer items-center justify-between py-4 font-medium text-gray-900">{question}<span class="transition-transform group-open:rotate-180">&#9662;</span></summary><p class="pb-4 text-gray-600">{answer}</p></details>"#
            )
        })
        .collect();

    let info = [
        contact_info(
            icons::mail("h-6 w-6 text-health-600"),
            "Email Us",
            r#"<a href="mailto:info@healthconsult.com" class="hover:text-health-600">info@healthconsult.com</a>"#,
        ),
        contact_info(
            icons::phone("h-6 w-6 text-health-600"),
            "Call Us",
            r#"<a href="tel:+18005551234" class="hover:text-health-600">+1 (800) 555-1234</a>"#,
        ),
        contact_info(
            icons::map_pin("h-6 w-6 text-health-600"),
            "Visit Us",
            "<address class=\"not-italic\">123 Health Avenue<br>San Francisco, CA 94103<br>United States</address>",
        ),
        contact_info(
            icons::clock("h-6 w-6 text-health-600"),
            "Business Hours",
            "<p>Monday - Friday: 9:00 AM - 8:00 PM EST</p><p>Saturday: 10:00 AM - 4:00 PM EST</p><p>Sunday: Closed</p>",
        ),
    ]
    .concat();

    format!(
        r#"<div class="container mx-auto px-4 py-16 md:px-6">
    <div class="mb-12 text-center">
        <h1 class="mb-4 text-4xl font-bold text-gray-900">Contact Us</h1>
        <p class="mx-auto max-w-3xl text-xl text-gray-600">Have questions or need assistance? We're here to help.</p>
    </div>
    <div class="mb-16 grid gap-6 md:grid-cols-3">{cards}</div>
    <div class="grid gap-8 lg:grid-cols-5">
        <div class="lg:col-span-2">{get_in_touch}</div>
        <div class="lg:col-span-3">{send_message}</div>
    </div>
    <section class="mx-auto mt-16 max-w-3xl">
        <h2 class="mb-8 text-center text-2xl font-semibold">Frequently Asked Questions</h2>
        {faq_card}
    </section>
</div>"#,
        get_in_touch = card(
            "p-6",
            &format!(
                r#"<h2 class="mb-6 text-2xl font-semibold">Get in Touch</h2><div class="space-y-6">{info}</div>"#
            ),
        ),
        send_message = card(
            "p-6",
            &format!(
                r#"<h2 class="mb-6 text-2xl font-semibold">Send a Message</h2>{form}"#,
                form = contact::contact_form(session_id, state),
            ),
        ),
        faq_card = card("px-6", &faqs),
    )
}

// ── Consultation ────────────────────────────────────────────────────────

pub fn consultation(session_id: &str, selection: &SymptomSelection) -> String {
    format!(
        r#"<div class="container mx-auto max-w-4xl px-4 py-16 md:px-6">
    <section class="mb-10 text-center">
        <h2 class="mb-4 text-3xl font-bold text-gray-900">How Can We Help You Today?</h2>
        <p class="mx-auto max-w-2xl text-lg text-gray-600">Please provide detailed information about your symptoms. A qualified healthcare professional will review your case and provide appropriate guidance.</p>
    </section>
    <div class="mb-10 flex flex-col items-start gap-4 rounded-xl border border-health-100 bg-health-50 p-6 md:flex-row md:items-center">
        <div class="rounded-full bg-white p-3">{bot}</div>
        <div class="flex-1">
            <h3 class="text-lg font-medium text-gray-800">Try Our New AI Health Assistant</h3>
            <p class="text-gray-600">Get instant feedback on your symptoms, personalized health recommendations, and preliminary diagnosis suggestions from our AI-powered healthcare assistant.</p>
        </div>
        {assistant_link}
    </div>
    {form}
    <section class="mt-10 flex gap-3 rounded-lg border border-red-100 bg-red-50 p-4 text-sm text-red-800">
        {alert}
        <p>In case of emergency, please dial your local emergency services immediately. This service is not a substitute for emergency medical care.</p>
    </section>
</div>"#,
        bot = icons::message("h-6 w-6 text-health-600"),
        assistant_link = link_button(
            "/dashboard",
            "Go to AI Health Assistant",
            ButtonVariant::Primary,
            ButtonSize::Md
        ),
        form = symptoms::symptom_form(session_id, selection),
        alert = icons::alert("h-5 w-5 shrink-0"),
    )
}

// ── Dashboard ───────────────────────────────────────────────────────────

fn coming_soon(icon: String, title: &str, body: &str) -> String {
    format!(
        r#"<div class="rounded-xl border border-dashed border-gray-200 py-16 text-center">{icon}<h3 class="mt-4 text-lg font-medium text-gray-900">{title}</h3><p class="mt-2 text-gray-500">{body}</p></div>"#
    )
}

pub fn dashboard(tab: DashboardTab, session_id: &str, chat_state: &ChatState) -> String {
    let tabs = tab_strip(
        "/dashboard",
        DashboardTab::ALL
            .iter()
            .map(|t| (t.slug(), t.label(), *t == tab)),
    );
    let icon_class = "mx-auto h-12 w-12 text-gray-400";
    let body = match tab {
        DashboardTab::Assistant => format!(
            r#"<div class="mb-6 flex gap-3 rounded-lg border border-blue-100 bg-blue-50 p-4">{info}<div><h3 class="font-medium text-blue-700">About the AI Healthcare Assistant</h3><p class="text-sm text-blue-600">Our AI assistant can help analyze symptoms, provide health recommendations, and suggest preliminary diagnoses. While the assistant uses medical knowledge, it's not a replacement for professional medical advice.</p></div></div>{widget}"#,
            info = icons::info("mt-0.5 h-5 w-5 shrink-0 text-blue-500"),
            widget = chat::chat_widget(session_id, chat_state),
        ),
        DashboardTab::Health => coming_soon(
            icons::activity(icon_class),
            "Health Metrics Coming Soon",
            "Track your vital signs, exercise, sleep patterns, and other health metrics.",
        ),
        DashboardTab::Appointments => coming_soon(
            icons::calendar(icon_class),
            "Appointments Coming Soon",
            "Schedule and manage your healthcare appointments in one place.",
        ),
        DashboardTab::Records => coming_soon(
            icons::info(icon_class),
            "Medical Records Coming Soon",
            "Access and manage your medical records securely.",
        ),
    };

    format!(
        r#"<div class="container mx-auto px-4 py-10 md:px-6">
    <section class="mb-8">
        <h1 class="text-3xl font-bold text-gray-900">Your Health Dashboard</h1>
        <p class="mt-2 text-gray-600">Monitor your health, get personalized recommendations, and chat with our AI assistant.</p>
    </section>
    {tabs}
    <div id="dashboard-{slug}" role="tabpanel">{body}</div>
</div>"#,
        slug = tab.slug(),
    )
}

// ── Login & 404 ─────────────────────────────────────────────────────────

pub fn login() -> String {
    format!(
        r#"<div class="container mx-auto flex max-w-md flex-col items-center px-4 py-24 text-center">
    {icon}
    <h1 class="mt-6 text-3xl font-bold text-gray-900">Sign In</h1>
    <p class="mt-4 text-gray-600">Patient accounts are coming soon. In the meantime you can describe your symptoms or talk to our AI assistant without signing in.</p>
    <div class="mt-8 flex gap-4">{consult}{assistant}</div>
</div>"#,
        icon = icons::shield("h-12 w-12 text-health-600"),
        consult = link_button(
            "/consultation",
            "Start a Consultation",
            ButtonVariant::Primary,
            ButtonSize::Md
        ),
        assistant = link_button(
            "/dashboard",
            "AI Assistant",
            ButtonVariant::Outline,
            ButtonSize::Md
        ),
    )
}

pub fn not_found(path: &str) -> String {
    format!(
        r#"<div class="container mx-auto flex flex-col items-center px-4 py-24 text-center">
    <h1 class="text-6xl font-bold text-health-600">404</h1>
    <p class="mt-4 text-xl text-gray-600">Oops! Page not found</p>
    <p class="mt-2 text-sm text-gray-400"><code>{path}</code></p>
    <div class="mt-8">{home}</div>
</div>"#,
        path = escape_html(path),
        home = link_button("/", "Return to Home", ButtonVariant::Primary, ButtonSize::Md),
    )
}
