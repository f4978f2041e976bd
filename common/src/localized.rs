//! Display name localization.

/// Entity carrying a default name along with an optional Korean one.
pub trait Localized {
    /// Returns the default name of this entity.
    fn name(&self) -> &str;

    /// Returns the Korean name of this entity, if any.
    fn name_ko(&self) -> Option<&str>;

    /// Returns the name of this entity to be displayed.
    ///
    /// The Korean name always takes precedence over the default one whenever
    /// both exist. This preference order is a fixed policy, not configurable
    /// per call site.
    fn display_name(&self) -> &str {
        self.name_ko().unwrap_or_else(|| self.name())
    }
}

#[cfg(test)]
mod spec {
    use super::Localized;

    struct Named {
        name: &'static str,
        name_ko: Option<&'static str>,
    }

    impl Localized for Named {
        fn name(&self) -> &str {
            self.name
        }

        fn name_ko(&self) -> Option<&str> {
            self.name_ko
        }
    }

    #[test]
    fn prefers_korean_name_when_present() {
        let named = Named {
            name: "Ho Chi Minh City",
            name_ko: Some("호치민"),
        };

        assert_eq!(named.display_name(), "호치민");
    }

    #[test]
    fn falls_back_to_default_name() {
        let named = Named {
            name: "Landmark 81",
            name_ko: None,
        };

        assert_eq!(named.display_name(), "Landmark 81");
    }
}
