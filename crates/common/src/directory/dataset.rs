//! Embedded directory data
//!
//! A fixed snapshot of partner organizations and sample events, served
//! without touching the content store.

use serde::Serialize;

use super::filter::{Community, Listing};
use super::view::{Card, CardView, DetailKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partner {
    pub name: &'static str,
    pub category: &'static str,
    pub community: Community,
    pub description: &'static str,
    pub address: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub website: Option<&'static str>,
    pub director: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleEvent {
    pub title: &'static str,
    pub category: &'static str,
    pub community: Community,
    pub description: &'static str,
    /// ISO date, `YYYY-MM-DD`
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub organizer: &'static str,
}

pub const PARTNERS: &[Partner] = &[
    Partner {
        name: "Eastside Community Food Pantry",
        category: "Food Security",
        community: Community::Black,
        description: "Weekly grocery distribution and fresh produce boxes for families on the east side.",
        address: Some("1420 Albemarle Rd"),
        phone: Some("(704) 555-0142"),
        website: Some("https://eastsidepantry.example.org"),
        director: Some("Denise Holloway"),
    },
    Partner {
        name: "Mesa Abierta Food Collective",
        category: "Food Security",
        community: Community::Latino,
        description: "Bilingual food distribution, cooking classes, and SNAP enrollment help.",
        address: Some("3300 Central Ave"),
        phone: Some("(704) 555-0177"),
        website: Some("https://mesaabierta.example.org"),
        director: Some("Rosa Delgado"),
    },
    Partner {
        name: "Unity Health Partners",
        category: "Health & Wellness",
        community: Community::Both,
        description: "Free blood pressure and diabetes screenings with community health workers.",
        address: Some("500 W Trade St"),
        phone: Some("(704) 555-0110"),
        website: Some("https://unityhealth.example.org"),
        director: Some("Dr. Marcus Reed"),
    },
    Partner {
        name: "Clinica de la Comunidad",
        category: "Health & Wellness",
        community: Community::Latino,
        description: "Sliding-scale primary care and mental health counseling in Spanish.",
        address: Some("2815 South Blvd"),
        phone: Some("(704) 555-0199"),
        website: None,
        director: Some("Dra. Lucia Morales"),
    },
    Partner {
        name: "Freedom School Learning Center",
        category: "Education",
        community: Community::Black,
        description: "After-school literacy programs and summer reading camps rooted in Black history.",
        address: Some("901 Beatties Ford Rd"),
        phone: Some("(704) 555-0125"),
        website: Some("https://freedomschool.example.org"),
        director: Some("Angela Brooks"),
    },
    Partner {
        name: "Puentes Adult Education",
        category: "Education",
        community: Community::Latino,
        description: "ESL classes, GED preparation, and citizenship workshops for adults.",
        address: Some("4120 Monroe Rd"),
        phone: Some("(704) 555-0163"),
        website: Some("https://puentes.example.org"),
        director: None,
    },
    Partner {
        name: "Black Business Collective",
        category: "Economic Development",
        community: Community::Black,
        description: "Mentorship, microloans, and procurement readiness for Black-owned businesses.",
        address: Some("226 N Tryon St"),
        phone: None,
        website: Some("https://bbcollective.example.org"),
        director: Some("Terrence Walker"),
    },
    Partner {
        name: "Hispanic Chamber Small Business Hub",
        category: "Economic Development",
        community: Community::Latino,
        description: "Business licensing help, bookkeeping clinics, and networking nights.",
        address: Some("1600 E Woodlawn Rd"),
        phone: Some("(704) 555-0188"),
        website: Some("https://hubnegocios.example.org"),
        director: Some("Carlos Ibarra"),
    },
    Partner {
        name: "Neighbors Legal Aid",
        category: "Legal Services",
        community: Community::Both,
        description: "Free consultations on tenant rights, immigration, and expungement.",
        address: Some("700 E Stonewall St"),
        phone: Some("(704) 555-0133"),
        website: Some("https://neighborslegal.example.org"),
        director: None,
    },
    Partner {
        name: "Homeward Housing Coalition",
        category: "Housing",
        community: Community::Both,
        description: "Rental assistance, first-time homebuyer courses, and eviction prevention.",
        address: None,
        phone: Some("(704) 555-0156"),
        website: Some("https://homeward.example.org"),
        director: Some("Patricia Nunez"),
    },
];

pub const SAMPLE_EVENTS: &[SampleEvent] = &[
    SampleEvent {
        title: "Community Health Fair",
        category: "Health & Wellness",
        community: Community::Both,
        description: "Screenings, flu shots, and nutrition tables from local clinics.",
        date: "2026-11-07",
        time: "9:00 AM - 2:00 PM",
        location: "Unity Health Partners",
        organizer: "Unity Health Partners",
    },
    SampleEvent {
        title: "Feria de Empleo",
        category: "Economic Development",
        community: Community::Latino,
        description: "Bilingual job fair with on-site interviews.",
        date: "2026-11-14",
        time: "10:00 AM - 3:00 PM",
        location: "Hispanic Chamber Small Business Hub",
        organizer: "Hispanic Chamber Small Business Hub",
    },
    SampleEvent {
        title: "Black Business Expo",
        category: "Economic Development",
        community: Community::Black,
        description: "Vendors, pitch competition, and financing workshops.",
        date: "2026-11-21",
        time: "11:00 AM - 5:00 PM",
        location: "Convention Center Hall B",
        organizer: "Black Business Collective",
    },
    SampleEvent {
        title: "Thanksgiving Food Drive",
        category: "Food Security",
        community: Community::Both,
        description: "Drop off non-perishables or volunteer to pack holiday boxes.",
        date: "2026-11-24",
        time: "8:00 AM - 12:00 PM",
        location: "Eastside Community Food Pantry",
        organizer: "Eastside Community Food Pantry",
    },
    SampleEvent {
        title: "Know Your Rights Workshop",
        category: "Legal Services",
        community: Community::Latino,
        description: "Attorneys answer questions on tenant and immigration rights.",
        date: "2026-12-03",
        time: "6:00 PM - 8:00 PM",
        location: "Neighbors Legal Aid",
        organizer: "Neighbors Legal Aid",
    },
    SampleEvent {
        title: "Kwanzaa Family Celebration",
        category: "Arts & Culture",
        community: Community::Black,
        description: "Music, storytelling, and a community feast.",
        date: "2026-12-27",
        time: "4:00 PM - 8:00 PM",
        location: "Freedom School Learning Center",
        organizer: "Freedom School Learning Center",
    },
];

impl Listing for Partner {
    fn name(&self) -> &str {
        self.name
    }

    fn category(&self) -> &str {
        self.category
    }

    fn community_focus(&self) -> Option<&str> {
        Some(self.community.as_str())
    }

    fn description(&self) -> Option<&str> {
        Some(self.description)
    }
}

impl Card for Partner {
    fn card(&self) -> CardView {
        CardView::from_listing(self)
            .with_detail(DetailKind::Address, self.address)
            .with_detail(DetailKind::Phone, self.phone)
            .with_detail(DetailKind::Director, self.director)
            .with_link(self.website)
    }
}

impl Listing for SampleEvent {
    fn name(&self) -> &str {
        self.title
    }

    fn category(&self) -> &str {
        self.category
    }

    fn community_focus(&self) -> Option<&str> {
        Some(self.community.as_str())
    }

    fn description(&self) -> Option<&str> {
        Some(self.description)
    }
}

impl Card for SampleEvent {
    fn card(&self) -> CardView {
        CardView::from_listing(self)
            .with_detail(DetailKind::Date, Some(self.date))
            .with_detail(DetailKind::Time, Some(self.time))
            .with_detail(DetailKind::Location, Some(self.location))
            .with_detail(DetailKind::Organizer, Some(self.organizer))
    }
}
