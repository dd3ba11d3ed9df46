//! Fixed example user seed set.
//!
//! The backend drops and reseeds its `users` table from this list at startup
//! and in test setups. The set is intentionally static: twenty users with
//! unique email addresses, enough to exercise pagination across multiple
//! pages at the default page size.
//!
//! These records are demonstration data only and must never be loaded into a
//! store holding real user rows.

use serde::Serialize;

/// One user row to be inserted during seeding.
///
/// The store assigns ids, so the seed carries only name and email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedUser {
    /// Display name of the seeded user.
    pub name: &'static str,
    /// Email address; unique across the whole set.
    pub email: &'static str,
}

const SEED_USERS: [SeedUser; 20] = [
    SeedUser {
        name: "Elena Smirnova",
        email: "elena.smirnova@example.com",
    },
    SeedUser {
        name: "Dmitry Kuznetsov",
        email: "d.kuznetsov@work.net",
    },
    SeedUser {
        name: "Svetlana Popova",
        email: "svetlana.p@mail.org",
    },
    SeedUser {
        name: "Andrey Vasilyev",
        email: "andrey.v@corp.com",
    },
    SeedUser {
        name: "Olga Petrova",
        email: "olga.petrova1@test.io",
    },
    SeedUser {
        name: "Viktor Makarov",
        email: "v.makarov@domain.net",
    },
    SeedUser {
        name: "Anastasia Fedorova",
        email: "nastia.f@example.org",
    },
    SeedUser {
        name: "Igor Sokolov",
        email: "igor.sokolov@work.com",
    },
    SeedUser {
        name: "Yulia Mikhailova",
        email: "julia.m@test.io",
    },
    SeedUser {
        name: "Sergey Novikov",
        email: "sergey.novikov@corp.net",
    },
    SeedUser {
        name: "Tatiana Morozova",
        email: "t.morozova@example.com",
    },
    SeedUser {
        name: "Alexey Volkov",
        email: "alex.volkov@mail.org",
    },
    SeedUser {
        name: "Marina Lebedeva",
        email: "marina.lebedeva@work.net",
    },
    SeedUser {
        name: "Konstantin Egorov",
        email: "k.egorov@domain.com",
    },
    SeedUser {
        name: "Irina Kozlova",
        email: "irina.k@test.io",
    },
    SeedUser {
        name: "Vladimir Pavlov",
        email: "vlad.pavlov@example.org",
    },
    SeedUser {
        name: "Ekaterina Semenova",
        email: "katya.s@corp.com",
    },
    SeedUser {
        name: "Roman Zakharov",
        email: "roman.zakharov@mail.net",
    },
    SeedUser {
        name: "Daria Golubeva",
        email: "dasha.g@work.io",
    },
    SeedUser {
        name: "Pavel Vinogradov",
        email: "pavel.vinogradov@domain.org",
    },
];

/// The default seed set, in insertion order.
#[must_use]
pub const fn default_seed() -> &'static [SeedUser] {
    &SEED_USERS
}
