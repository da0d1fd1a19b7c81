use once_cell::sync::Lazy;

use crate::models::Internship;

pub const ALL_DOMAINS: &str = "All";

pub const DOMAINS: [&str; 7] = [
    ALL_DOMAINS,
    "Software Development",
    "Data Science",
    "Backend Development",
    "Frontend Development",
    "Mobile Development",
    "AI/ML",
];

static LISTINGS: Lazy<Vec<Internship>> = Lazy::new(|| {
    vec![
        listing(
            "1",
            "Google India",
            "Software Engineering Intern",
            "Bangalore, Karnataka",
            "₹1,50,000/month",
            "3 months",
            "Software Development",
            92,
            "Build scalable systems and work with cutting-edge technologies",
            &["Python", "JavaScript", "System Design"],
            &["Go", "Kubernetes"],
        ),
        listing(
            "2",
            "Microsoft India",
            "Data Science Intern",
            "Hyderabad, Telangana",
            "₹1,80,000/month",
            "4 months",
            "Data Science",
            85,
            "Work on ML models and data analysis projects",
            &["Python", "Statistics", "SQL"],
            &["TensorFlow", "Apache Spark"],
        ),
        listing(
            "3",
            "Amazon India",
            "Backend Engineer Intern",
            "Mumbai, Maharashtra",
            "₹1,70,000/month",
            "3 months",
            "Backend Development",
            88,
            "Develop backend services and APIs",
            &["Java", "AWS", "Microservices"],
            &["Docker", "AWS Lambda"],
        ),
        listing(
            "4",
            "Flipkart",
            "Frontend Engineer Intern",
            "Bangalore, Karnataka",
            "₹1,60,000/month",
            "3 months",
            "Frontend Development",
            78,
            "Build user interfaces for millions of users",
            &["React", "JavaScript", "CSS"],
            &["GraphQL", "TypeScript"],
        ),
        listing(
            "5",
            "Paytm",
            "Mobile Developer Intern",
            "Noida, Uttar Pradesh",
            "₹1,40,000/month",
            "3 months",
            "Mobile Development",
            72,
            "Develop mobile applications for fintech",
            &["React Native", "JavaScript", "iOS"],
            &["Flutter", "Swift"],
        ),
        listing(
            "6",
            "Infosys",
            "AI/ML Intern",
            "Pune, Maharashtra",
            "₹1,50,000/month",
            "4 months",
            "AI/ML",
            65,
            "Work on AI and machine learning projects",
            &["Python", "TensorFlow", "Deep Learning"],
            &["PyTorch", "Computer Vision"],
        ),
    ]
});

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    company: &str,
    title: &str,
    location: &str,
    stipend: &str,
    duration: &str,
    domain: &str,
    match_score: u8,
    description: &str,
    skills: &[&str],
    missing_skills: &[&str],
) -> Internship {
    Internship {
        id: id.to_string(),
        company: company.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        stipend: stipend.to_string(),
        duration: duration.to_string(),
        domain: domain.to_string(),
        match_score,
        description: description.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        missing_skills: missing_skills.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn listings() -> &'static [Internship] {
    &LISTINGS
}

/// Query matches company or title case-insensitively; an empty query matches everything.
pub fn filter(query: &str, domain: &str) -> Vec<&'static Internship> {
    let query = query.to_lowercase();
    LISTINGS
        .iter()
        .filter(|internship| {
            let matches_search = internship.company.to_lowercase().contains(&query)
                || internship.title.to_lowercase().contains(&query);
            let matches_domain = domain == ALL_DOMAINS || internship.domain == domain;
            matches_search && matches_domain
        })
        .collect()
}

pub fn find(id: &str) -> Option<&'static Internship> {
    LISTINGS.iter().find(|internship| internship.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_with_all_lists_everything() {
        assert_eq!(filter("", ALL_DOMAINS).len(), listings().len());
    }

    #[test]
    fn query_matches_company_or_title() {
        let by_company: Vec<&str> = filter("flip", ALL_DOMAINS).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(by_company, vec!["4"]);

        let by_title: Vec<&str> = filter("INTERN", "Data Science").iter().map(|i| i.id.as_str()).collect();
        assert_eq!(by_title, vec!["2"]);
    }

    #[test]
    fn domain_must_match_exactly() {
        assert!(filter("", "data science").is_empty());
        assert_eq!(filter("", "AI/ML").len(), 1);
    }

    #[test]
    fn every_listing_domain_is_filterable() {
        for internship in listings() {
            assert!(DOMAINS.contains(&internship.domain.as_str()));
        }
    }

    #[test]
    fn find_by_id() {
        assert_eq!(find("3").map(|i| i.company.as_str()), Some("Amazon India"));
        assert!(find("99").is_none());
    }
}
