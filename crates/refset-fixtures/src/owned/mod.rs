//! Owned-entity query data.
//!
//! A person hierarchy with owned addresses and owned order collections,
//! plus a small planetary system whose planets, stars and moons reference
//! each other, and a barton/fink pair.

mod data;
mod model;

#[cfg(test)]
mod tests;

pub use model::*;

use refset_core::{
    arena::{self, Arena},
    error::InternalError,
    fixture::{BuildStats, ExpectedData},
    set::{self, SetIter, SetRegistry, SetSource},
    traits::{EntityKind, Path},
};

static EXPECTED: ExpectedData<OwnedQueryData> = ExpectedData::new();

/// Shared, lazily built instance.
pub fn expected() -> Result<&'static OwnedQueryData, InternalError> {
    EXPECTED.get_or_build(OwnedQueryData::new)
}

///
/// OwnedQueryData
///

pub struct OwnedQueryData {
    persons: Arena<OwnedPersonKind>,
    planets: Arena<Planet>,
    stars: Arena<Star>,
    moons: Arena<Moon>,
    bartons: Arena<Barton>,
    finks: Arena<Fink>,
    registry: SetRegistry<Self>,
}

impl Path for OwnedQueryData {
    const PATH: &'static str = "owned::OwnedQueryData";
}

impl OwnedQueryData {
    /// Build, wire and validate a fresh graph.
    pub fn new() -> Result<Self, InternalError> {
        let mut stats = BuildStats::new();

        let mut this = Self {
            stars: data::stars(),
            planets: data::planets(),
            moons: data::moons(),
            bartons: data::bartons(),
            finks: data::finks(),
            persons: data::persons()?,
            registry: registry()?,
        };

        this.wire(&mut stats)?;
        this.validate()?;

        stats.built(&this.persons);
        stats.built(&this.planets);
        stats.built(&this.stars);
        stats.built(&this.moons);
        stats.built(&this.bartons);
        stats.built(&this.finks);
        stats.publish::<Self>();

        Ok(this)
    }

    // ------------------------------------------------------------------
    // Wire-up
    // ------------------------------------------------------------------

    fn wire(&mut self, stats: &mut BuildStats) -> Result<(), InternalError> {
        let earth = stats.link(&self.planets, 0)?;
        let sol = stats.link(&self.stars, 0)?;
        let luna = stats.link(&self.moons, 0)?;
        let barton = stats.link(&self.bartons, 0)?;
        let fink = stats.link(&self.finks, 0)?;

        let planet = self.planets.get_mut(earth)?;
        planet.star = Some(sol);
        planet.moons = vec![luna];
        self.stars.get_mut(sol)?.planets = vec![earth];
        self.moons.get_mut(luna)?.planet = Some(earth);
        self.finks.get_mut(fink)?.barton = Some(barton);
        stats.wired(2);

        for (client, row) in self.persons.links_mut() {
            for order in &mut row.as_person_mut().orders {
                order.client = Some(client);
                stats.wired(1);
            }

            for address in row.addresses_mut() {
                let planet_id = address.country.planet_id;
                let planet = self.planets.find(|p| p.id == planet_id).ok_or_else(|| {
                    InternalError::graph_invariant(format!(
                        "country '{}' references missing planet {planet_id}",
                        address.country.name
                    ))
                })?;
                address.country.planet = Some(planet);
                stats.wired(1);
            }
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    fn validate(&self) -> Result<(), InternalError> {
        self.persons
            .ensure_unique_by(OwnedPerson::PATH, |row| row.as_person().key())?;
        arena::ensure_unique(Order::PATH, self.orders().map(Order::key))?;
        arena::ensure_unique(Element::PATH, self.elements().map(Element::key))?;
        self.planets.ensure_unique_keys()?;
        self.stars.ensure_unique_keys()?;
        self.moons.ensure_unique_keys()?;
        self.bartons.ensure_unique_keys()?;
        self.finks.ensure_unique_keys()?;

        for order in self.orders() {
            let client = self.client_of(order)?;
            if client.id != order.client_id {
                return Err(InternalError::graph_invariant(format!(
                    "order {} has ClientId {} but is owned by person {}",
                    order.id, order.client_id, client.id
                )));
            }
        }

        for row in &self.persons {
            for address in row.addresses() {
                self.planet_of_country(&address.country)?;
            }
        }

        for planet in &self.planets {
            self.star_of(planet)?;
            self.moons_of(planet)?;
        }
        for star in &self.stars {
            self.planets_of(star)?;
        }
        for moon in &self.moons {
            self.planet_of_moon(moon)?;
        }
        for fink in &self.finks {
            self.barton_of(fink)?;
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Stored person rows, most-derived variant each.
    #[must_use]
    pub const fn persons(&self) -> &Arena<OwnedPersonKind> {
        &self.persons
    }

    /// Every order, in person order.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.persons
            .iter()
            .flat_map(|row| row.as_person().orders.iter())
    }

    /// Every element, in star order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.stars.iter().flat_map(|star| star.composition.iter())
    }

    // ------------------------------------------------------------------
    // Relationship resolvers
    // ------------------------------------------------------------------

    pub fn client_of(&self, order: &Order) -> Result<&OwnedPerson, InternalError> {
        self.persons
            .follow(order.client, Order::PATH, "Client")
            .map(OwnedPersonKind::as_person)
    }

    pub fn star_of(&self, planet: &Planet) -> Result<&Star, InternalError> {
        self.stars.follow(planet.star, Planet::PATH, "Star")
    }

    pub fn planets_of(&self, star: &Star) -> Result<Vec<&Planet>, InternalError> {
        self.planets.resolve_many(&star.planets)
    }

    pub fn moons_of(&self, planet: &Planet) -> Result<Vec<&Moon>, InternalError> {
        self.moons.resolve_many(&planet.moons)
    }

    pub fn planet_of_moon(&self, moon: &Moon) -> Result<&Planet, InternalError> {
        self.planets.follow(moon.planet, Moon::PATH, "Planet")
    }

    pub fn planet_of_country(&self, country: &OwnedCountry) -> Result<&Planet, InternalError> {
        self.planets.follow(country.planet, OwnedCountry::PATH, "Planet")
    }

    /// `Barton` is optional on `Fink`; `None` is a valid answer.
    pub fn barton_of(&self, fink: &Fink) -> Result<Option<&Barton>, InternalError> {
        fink.barton
            .map(|link| self.bartons.resolve(link))
            .transpose()
    }
}

impl SetSource for OwnedQueryData {
    fn registry(&self) -> &SetRegistry<Self> {
        &self.registry
    }
}

// ---------------------------------------------------------------------------
// Set projections
// ---------------------------------------------------------------------------

fn registry() -> Result<SetRegistry<OwnedQueryData>, InternalError> {
    SetRegistry::new()
        .with::<OwnedPerson>(owned_persons)?
        .with::<Branch>(branches)?
        .with::<LeafA>(leaf_as)?
        .with::<LeafB>(leaf_bs)?
        .with::<Order>(orders)?
        .with::<Planet>(planets)?
        .with::<Star>(stars)?
        .with::<Element>(elements)?
        .with::<Moon>(moons)?
        .with::<Barton>(bartons)?
        .with::<Fink>(finks)
}

fn owned_persons(data: &OwnedQueryData) -> SetIter<'_, OwnedPerson> {
    Box::new(data.persons.iter().map(OwnedPersonKind::as_person))
}

/// Rows stored exactly as `Branch`. `LeafA` rows embed a branch but are
/// served only by the `LeafA` set, so key 3 is not part of this sequence.
fn branches(data: &OwnedQueryData) -> SetIter<'_, Branch> {
    set::narrow(&data.persons, OwnedPersonKind::as_branch)
}

fn leaf_as(data: &OwnedQueryData) -> SetIter<'_, LeafA> {
    set::narrow(&data.persons, OwnedPersonKind::as_leaf_a)
}

fn leaf_bs(data: &OwnedQueryData) -> SetIter<'_, LeafB> {
    set::narrow(&data.persons, OwnedPersonKind::as_leaf_b)
}

fn orders(data: &OwnedQueryData) -> SetIter<'_, Order> {
    Box::new(data.orders())
}

fn planets(data: &OwnedQueryData) -> SetIter<'_, Planet> {
    set::all(&data.planets)
}

fn stars(data: &OwnedQueryData) -> SetIter<'_, Star> {
    set::all(&data.stars)
}

fn elements(data: &OwnedQueryData) -> SetIter<'_, Element> {
    Box::new(data.elements())
}

fn moons(data: &OwnedQueryData) -> SetIter<'_, Moon> {
    set::all(&data.moons)
}

fn bartons(data: &OwnedQueryData) -> SetIter<'_, Barton> {
    set::all(&data.bartons)
}

fn finks(data: &OwnedQueryData) -> SetIter<'_, Fink> {
    set::all(&data.finks)
}
