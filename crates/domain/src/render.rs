//! Render model — the grouped, ordered, filtered view computed for display.
//!
//! Derived state only; nothing here is ever persisted.

use std::collections::BTreeMap;

use crate::service::Service;

/// One displayed category section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub name: String,
    pub services: Vec<Service>,
}

/// Why the computed view has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The document holds no services at all (prompt the user to add one).
    NoServices,
    /// Services exist but none matched a non-empty filter (suggest a
    /// different search term).
    NoMatches,
}

/// The computed view: grouped sections in display order, or an explicit
/// empty marker selecting one of two user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderModel {
    Groups(Vec<CategoryGroup>),
    Empty(EmptyReason),
}

/// Compute the display view for the given filter text.
///
/// A service is included when `filter` is a case-insensitive substring of
/// its name, category, or description (the empty filter matches
/// everything). Groups appear in `categories_order` order; matching
/// categories missing from that list follow, sorted lexicographically.
/// Within a group, services keep their order from `all_services`.
#[must_use]
pub fn compute_render_model(
    all_services: &[Service],
    categories_order: &[String],
    filter: &str,
) -> RenderModel {
    let needle = filter.to_lowercase();
    let matching: Vec<&Service> = all_services
        .iter()
        .filter(|service| matches_filter(service, &needle))
        .collect();

    if matching.is_empty() {
        let reason = if filter.is_empty() {
            EmptyReason::NoServices
        } else {
            EmptyReason::NoMatches
        };
        return RenderModel::Empty(reason);
    }

    let mut by_category: BTreeMap<&str, Vec<Service>> = BTreeMap::new();
    for service in matching {
        by_category
            .entry(service.category.as_str())
            .or_default()
            .push(service.clone());
    }

    let mut groups = Vec::with_capacity(by_category.len());
    for name in categories_order {
        if let Some(services) = by_category.remove(name.as_str()) {
            groups.push(CategoryGroup {
                name: name.clone(),
                services,
            });
        }
    }
    // Categories never placed in the ordered list; BTreeMap iteration
    // yields them lexicographically.
    for (name, services) in by_category {
        groups.push(CategoryGroup {
            name: name.to_string(),
            services,
        });
    }

    RenderModel::Groups(groups)
}

fn matches_filter(service: &Service, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    service.name.to_lowercase().contains(needle)
        || service.category.to_lowercase().contains(needle)
        || service.description.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::service::ServiceFields;

    fn add(doc: &mut Document, name: &str, category: &str, description: &str) {
        doc.add_service(ServiceFields {
            name: name.to_string(),
            url: format!("http://{}.local", name.to_lowercase()),
            category: category.to_string(),
            icon: String::new(),
            description: description.to_string(),
        })
        .unwrap();
    }

    fn group_names(model: &RenderModel) -> Vec<String> {
        match model {
            RenderModel::Groups(groups) => groups.iter().map(|g| g.name.clone()).collect(),
            RenderModel::Empty(_) => panic!("expected groups, got empty"),
        }
    }

    #[test]
    fn should_include_every_service_exactly_once_with_empty_filter() {
        let mut doc = Document::default();
        add(&mut doc, "Router", "Network", "");
        add(&mut doc, "Jellyfin", "Media", "");
        add(&mut doc, "Radarr", "Media", "");

        let model = compute_render_model(&doc.services, &doc.categories, "");

        let RenderModel::Groups(groups) = model else {
            panic!("expected groups");
        };
        let total: usize = groups.iter().map(|g| g.services.len()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn should_order_groups_by_category_list_not_alphabetically() {
        let mut doc = Document::default();
        add(&mut doc, "Jellyfin", "B", "");
        add(&mut doc, "Grafana", "A", "");

        let model = compute_render_model(&doc.services, &doc.categories, "");

        // Insertion order into the category list, "B" before "A".
        assert_eq!(group_names(&model), vec!["B", "A"]);
    }

    #[test]
    fn should_follow_reordered_category_list() {
        let mut doc = Document::default();
        add(&mut doc, "Router", "Network", "");
        add(&mut doc, "Jellyfin", "Media", "");
        add(&mut doc, "NAS", "Storage", "");

        let order = vec![
            "Storage".to_string(),
            "Network".to_string(),
            "Media".to_string(),
        ];
        doc.reorder_categories(order.clone());

        let model = compute_render_model(&doc.services, &doc.categories, "");
        assert_eq!(group_names(&model), order);
    }

    #[test]
    fn should_place_unlisted_categories_after_listed_sorted_lexicographically() {
        let mut doc = Document::default();
        add(&mut doc, "Router", "Network", "");
        add(&mut doc, "Zabbix", "Zeta", "");
        add(&mut doc, "Grafana", "Alpha", "");

        // Only "Network" remains listed; "Zeta" and "Alpha" are orphaned.
        doc.reorder_categories(vec!["Network".to_string()]);

        let model = compute_render_model(&doc.services, &doc.categories, "");
        assert_eq!(group_names(&model), vec!["Network", "Alpha", "Zeta"]);
    }

    #[test]
    fn should_skip_listed_categories_with_no_matching_service() {
        let mut doc = Document::default();
        add(&mut doc, "Router", "Network", "");
        add(&mut doc, "Jellyfin", "Media", "");

        let model = compute_render_model(&doc.services, &doc.categories, "jelly");

        assert_eq!(group_names(&model), vec!["Media"]);
    }

    #[test]
    fn should_match_case_insensitively_on_name_category_and_description() {
        let mut doc = Document::default();
        add(&mut doc, "Router", "Network", "");
        add(&mut doc, "Jellyfin", "Media", "movie NIGHTS");
        add(&mut doc, "NAS", "Storage", "");

        let by_name = compute_render_model(&doc.services, &doc.categories, "ROUTER");
        assert_eq!(group_names(&by_name), vec!["Network"]);

        let by_category = compute_render_model(&doc.services, &doc.categories, "stor");
        assert_eq!(group_names(&by_category), vec!["Storage"]);

        let by_description = compute_render_model(&doc.services, &doc.categories, "nights");
        assert_eq!(group_names(&by_description), vec!["Media"]);
    }

    #[test]
    fn should_keep_insertion_order_within_a_group() {
        let mut doc = Document::default();
        add(&mut doc, "Zabbix", "Monitoring", "");
        add(&mut doc, "Grafana", "Monitoring", "");

        let model = compute_render_model(&doc.services, &doc.categories, "");

        let RenderModel::Groups(groups) = model else {
            panic!("expected groups");
        };
        let names: Vec<&str> = groups[0].services.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Zabbix", "Grafana"]);
    }

    #[test]
    fn should_report_no_services_when_document_is_empty() {
        let model = compute_render_model(&[], &[], "");
        assert_eq!(model, RenderModel::Empty(EmptyReason::NoServices));
    }

    #[test]
    fn should_report_no_matches_when_filter_excludes_everything() {
        let mut doc = Document::default();
        add(&mut doc, "Router", "Network", "");

        let model = compute_render_model(&doc.services, &doc.categories, "jellyfin");

        assert_eq!(model, RenderModel::Empty(EmptyReason::NoMatches));
    }
}
