//! [`Apartment`] definitions.

use std::str::FromStr;

use common::Localized;
use derive_more::{AsRef, Display};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};

use super::city;

/// Apartment complex listings may be attached to.
///
/// Belongs to exactly one [`City`]. Reference data seeded externally and
/// never mutated by this service.
///
/// [`City`]: super::City
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Apartment {
    /// ID of this [`Apartment`].
    pub id: Id,

    /// Default [`Name`] of this [`Apartment`].
    pub name: Name,

    /// Korean [`Name`] of this [`Apartment`], if any.
    pub name_ko: Option<Name>,

    /// ID of the [`City`] this [`Apartment`] belongs to.
    ///
    /// [`City`]: super::City
    pub city_id: city::Id,

    /// [`District`] of this [`Apartment`], if known.
    pub district: Option<District>,

    /// Korean [`District`] of this [`Apartment`], if known.
    pub district_ko: Option<District>,
}

impl Localized for Apartment {
    fn name(&self) -> &str {
        self.name.as_ref()
    }

    fn name_ko(&self) -> Option<&str> {
        self.name_ko.as_ref().map(AsRef::as_ref)
    }
}

impl Apartment {
    /// Returns the [`District`] of this [`Apartment`] to be displayed.
    ///
    /// The Korean district always takes precedence, matching the
    /// [`Localized`] name policy.
    #[must_use]
    pub fn display_district(&self) -> Option<&District> {
        self.district_ko.as_ref().or(self.district.as_ref())
    }
}

/// ID of an [`Apartment`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
#[as_ref(forward)]
pub struct Id(String);

impl Id {
    /// Creates a new [`Id`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `id` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a new [`Id`] if the given `id` is valid.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        Self::check(&id).then_some(Self(id))
    }

    /// Checks whether the given `id` is a valid [`Id`].
    fn check(id: impl AsRef<str>) -> bool {
        let id = id.as_ref();
        id.trim() == id && !id.is_empty() && id.len() <= 64
    }
}

impl FromStr for Id {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `apartment::Id`")
    }
}

/// Name of an [`Apartment`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
#[as_ref(forward)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `apartment::Name`")
    }
}

/// District an [`Apartment`] is located in.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
#[as_ref(forward)]
pub struct District(String);

impl District {
    /// Creates a new [`District`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `district` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(district: impl Into<String>) -> Self {
        Self(district.into())
    }

    /// Creates a new [`District`] if the given `district` is valid.
    #[must_use]
    pub fn new(district: impl Into<String>) -> Option<Self> {
        let district = district.into();
        Self::check(&district).then_some(Self(district))
    }

    /// Checks whether the given `district` is a valid [`District`].
    fn check(district: impl AsRef<str>) -> bool {
        let district = district.as_ref();
        district.trim() == district
            && !district.is_empty()
            && district.len() <= 512
    }
}

impl FromStr for District {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `apartment::District`")
    }
}
