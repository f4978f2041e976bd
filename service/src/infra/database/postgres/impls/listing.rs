//! [`Listing`]-related [`Database`] implementations.

use common::{
    operations::{By, Select, Update},
    Money, Page,
};
use itertools::Itertools as _;
use postgres_types::ToSql;
use tracerr::Traced;

use crate::{
    domain::{listing, Listing},
    infra::{
        database::{
            self, postgres,
            postgres::{Connection, LikePattern},
            Postgres,
        },
        Database,
    },
    read,
};

impl<C> Database<Select<By<Option<Listing>, listing::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Listing>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Listing>, listing::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: listing::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id, title, \
                   price, price_currency, \
                   city_id, apartment_id, \
                   created_at \
            FROM listings \
            WHERE id = $1::UUID \
            LIMIT 1";
        Ok(self
            .query_opt(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .map(|row| Listing {
                id: row.get("id"),
                title: row.get("title"),
                price: Money {
                    amount: row.get("price"),
                    currency: row.get("price_currency"),
                },
                city_id: row.get("city_id"),
                apartment_id: row.get("apartment_id"),
                created_at: row.get("created_at"),
                // OK, because a `Listing` is removed from database
                // completely once deleted.
                deleted_at: None,
            }))
    }
}

impl<C> Database<Select<By<Vec<listing::Image>, listing::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<listing::Image>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<listing::Image>, listing::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let listing_id: listing::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id, listing_id, url, position \
            FROM listing_images \
            WHERE listing_id = $1::UUID \
            ORDER BY position ASC";
        self.query(SQL, &[&listing_id])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| {
                Ok(listing::Image {
                    id: row.get("id"),
                    listing_id: row.get("listing_id"),
                    url: row.get("url"),
                    position: position(row.get("position"))?,
                })
            })
            .collect()
    }
}

/// Decodes a [`listing::Position`] out of its stored `INT4` representation.
///
/// # Errors
///
/// If the stored value doesn't fit a [`listing::Position`].
fn position(
    value: i32,
) -> Result<listing::Position, Traced<database::Error>> {
    u16::try_from(value).map_err(|_| {
        tracerr::new!(database::Error::Postgres(
            postgres::Error::OutOfRangeColumn("position"),
        ))
    })
}

impl<C> Database<Update<Vec<listing::Image>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(images): Update<Vec<listing::Image>>,
    ) -> Result<Self::Ok, Self::Err> {
        if images.is_empty() {
            return Ok(());
        }

        let (ids, positions): (Vec<listing::ImageId>, Vec<i32>) = images
            .iter()
            .map(|img| (img.id, i32::from(img.position)))
            .unzip();

        const SQL: &str = "\
            UPDATE listing_images AS img \
            SET position = upd.position \
            FROM (SELECT unnest($1::UUID[]) AS id, \
                         unnest($2::INT4[]) AS position) AS upd \
            WHERE img.id = upd.id";
        self.exec(SQL, &[&ids, &positions])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C>
    Database<
        Select<
            By<Page<read::listing::list::Node>, read::listing::list::Selector>,
        >,
    > for Postgres<C>
where
    C: Connection,
{
    type Ok = Page<read::listing::list::Node>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<Page<read::listing::list::Node>, read::listing::list::Selector>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let read::listing::list::Selector { window, filter } = by.into_inner();
        let read::listing::list::Filter {
            city,
            apartment,
            price_min,
            price_max,
            title,
        } = filter;

        let limit = i64::try_from(window.limit()).unwrap_or(i64::MAX);

        let mut ps: Vec<&(dyn ToSql + Sync)> = vec![&limit];

        let city_idx = city.as_ref().map(|c| {
            ps.push(c);
            ps.len()
        });
        let apartment_idx = apartment.as_ref().map(|a| {
            ps.push(a);
            ps.len()
        });
        let price_min_idx = price_min.as_ref().map(|p| {
            ps.push(p);
            ps.len()
        });
        let price_max_idx = price_max.as_ref().map(|p| {
            ps.push(p);
            ps.len()
        });

        let title_pattern =
            title.as_ref().map(|t| LikePattern::new(t.as_ref()));
        let title_idx = title_pattern.as_ref().map(|p| {
            ps.push(p);
            ps.len()
        });

        let sql = format!(
            "SELECT id, COUNT(*) OVER ()::INT8 AS total \
             FROM listings \
             WHERE true \
                   {city} \
                   {apartment} \
                   {price_min} \
                   {price_max} \
                   {title} \
             ORDER BY created_at DESC, \
                      id DESC \
             LIMIT $1::INT8",
            city = city_idx.into_iter().format_with("", |idx, f| {
                f(&format_args!("AND city_id = ${idx}::VARCHAR"))
            }),
            apartment = apartment_idx.into_iter().format_with("", |idx, f| {
                f(&format_args!("AND apartment_id = ${idx}::VARCHAR"))
            }),
            price_min = price_min_idx.into_iter().format_with("", |idx, f| {
                f(&format_args!("AND price >= ${idx}::NUMERIC"))
            }),
            price_max = price_max_idx.into_iter().format_with("", |idx, f| {
                f(&format_args!("AND price <= ${idx}::NUMERIC"))
            }),
            title = title_idx.into_iter().format_with("", |idx, f| {
                f(&format_args!(
                    "AND LOWER(title) SIMILAR TO LOWER(${idx}::VARCHAR)"
                ))
            }),
        );
        let rows = self
            .query(&sql, ps.as_slice())
            .await
            .map_err(tracerr::wrap!())?;

        let total = rows.first().map_or(0, |row| {
            usize::try_from(row.get::<_, i64>("total")).unwrap_or(0)
        });
        let nodes = rows
            .into_iter()
            .map(|row| row.get::<_, listing::Id>("id"));

        Ok(Page::new(window, nodes, total))
    }
}

impl<C>
    Database<
        Select<By<read::listing::list::TotalCount, read::listing::list::Filter>>,
    > for Postgres<C>
where
    C: Connection,
{
    type Ok = read::listing::list::TotalCount;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::listing::list::TotalCount, read::listing::list::Filter>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let read::listing::list::Filter {
            city,
            apartment,
            price_min,
            price_max,
            title,
        } = by.into_inner();

        let mut ps: Vec<&(dyn ToSql + Sync)> = vec![];

        let city_idx = city.as_ref().map(|c| {
            ps.push(c);
            ps.len()
        });
        let apartment_idx = apartment.as_ref().map(|a| {
            ps.push(a);
            ps.len()
        });
        let price_min_idx = price_min.as_ref().map(|p| {
            ps.push(p);
            ps.len()
        });
        let price_max_idx = price_max.as_ref().map(|p| {
            ps.push(p);
            ps.len()
        });

        let title_pattern =
            title.as_ref().map(|t| LikePattern::new(t.as_ref()));
        let title_idx = title_pattern.as_ref().map(|p| {
            ps.push(p);
            ps.len()
        });

        let sql = format!(
            "SELECT COUNT(*)::INT4 \
             FROM listings \
             WHERE true \
                   {city} \
                   {apartment} \
                   {price_min} \
                   {price_max} \
                   {title}",
            city = city_idx.into_iter().format_with("", |idx, f| {
                f(&format_args!("AND city_id = ${idx}::VARCHAR"))
            }),
            apartment = apartment_idx.into_iter().format_with("", |idx, f| {
                f(&format_args!("AND apartment_id = ${idx}::VARCHAR"))
            }),
            price_min = price_min_idx.into_iter().format_with("", |idx, f| {
                f(&format_args!("AND price >= ${idx}::NUMERIC"))
            }),
            price_max = price_max_idx.into_iter().format_with("", |idx, f| {
                f(&format_args!("AND price <= ${idx}::NUMERIC"))
            }),
            title = title_idx.into_iter().format_with("", |idx, f| {
                f(&format_args!(
                    "AND LOWER(title) SIMILAR TO LOWER(${idx}::VARCHAR)"
                ))
            }),
        );
        self.query_opt(&sql, ps.as_slice())
            .await
            .map_err(tracerr::wrap!())
            .map(|row| row.expect("always exists").get::<_, i32>(0).into())
    }
}

#[cfg(test)]
mod spec {
    use super::position;

    #[test]
    fn decodes_positions_fitting_the_domain_type() {
        assert_eq!(position(0).unwrap(), 0);
        assert_eq!(position(65_535).unwrap(), 65_535);
    }

    #[test]
    fn rejects_positions_out_of_range() {
        assert!(position(-1).is_err());
        assert!(position(65_536).is_err());
    }
}
