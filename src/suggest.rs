use once_cell::sync::Lazy;

use crate::models::{Branch, RoleSuggestion};

static SUGGESTIONS: Lazy<Vec<(Branch, Vec<RoleSuggestion>)>> = Lazy::new(build_suggestions);

/// Authored suggestions for a branch. Branches without a table, including
/// Chemical Engineering, use the Other table.
pub fn suggestions_for(branch: &str) -> &'static [RoleSuggestion] {
    let branch = Branch::resolve(branch);
    SUGGESTIONS
        .iter()
        .find(|(key, _)| *key == branch)
        .or_else(|| SUGGESTIONS.iter().find(|(key, _)| *key == Branch::Other))
        .map(|(_, entries)| entries.as_slice())
        .unwrap_or(&[])
}

pub fn interest_keywords(interests: &str) -> Vec<String> {
    interests
        .to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn keyword_matches(keywords: &[String], entry: &RoleSuggestion) -> usize {
    let key = entry.interest_key.to_lowercase();
    let role = entry.role.to_lowercase();
    let description = entry.description.to_lowercase();
    keywords
        .iter()
        .filter(|keyword| {
            key.contains(keyword.as_str())
                || role.contains(keyword.as_str())
                || description.contains(keyword.as_str())
        })
        .count()
}

/// Picks the single best suggestion for the quick form. `_skills` is accepted
/// for the form's shape but does not influence the choice.
pub fn suggest_role(branch: &str, _skills: &str, interests: &str) -> RoleSuggestion {
    let keywords = interest_keywords(interests);
    let entries = suggestions_for(branch);

    let mut best: Option<&RoleSuggestion> = None;
    let mut highest = 0.0_f64;

    for entry in entries {
        let matches = keyword_matches(&keywords, entry);
        let score = f64::from(entry.match_score) * (1.0 + matches as f64 * 0.1);
        if score > highest {
            highest = score;
            best = Some(entry);
        }
    }

    let chosen = best.or_else(|| entries.first());
    match chosen {
        Some(entry) => entry.clone(),
        None => suggestions_for(Branch::Other.label())[0].clone(),
    }
}

struct Entry<'a> {
    key: &'a str,
    role: &'a str,
    match_score: u8,
    description: &'a str,
    why: &'a str,
    skills: [&'a str; 5],
    salary: &'a str,
    companies: &'a [&'a str],
    growth: [&'a str; 4],
    tips: [&'a str; 3],
}

impl Entry<'_> {
    fn build(self) -> RoleSuggestion {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        RoleSuggestion {
            interest_key: self.key.to_string(),
            role: self.role.to_string(),
            match_score: self.match_score,
            description: self.description.to_string(),
            why_this_role: self.why.to_string(),
            required_skills: owned(&self.skills),
            salary_range: self.salary.to_string(),
            companies: owned(self.companies),
            growth_path: owned(&self.growth),
            interview_tips: owned(&self.tips),
        }
    }
}

fn build_suggestions() -> Vec<(Branch, Vec<RoleSuggestion>)> {
    vec![
        (
            Branch::ComputerScience,
            vec![
                Entry {
                    key: "Web Development",
                    role: "Full Stack Developer",
                    match_score: 95,
                    description: "Build end-to-end web applications using modern frameworks and technologies",
                    why: "Your interest in Web Development perfectly aligns with Full Stack Development. You can work on both frontend and backend, making you highly valuable in Indian startups.",
                    skills: ["React.js", "Node.js", "MongoDB", "AWS", "Git"],
                    salary: "₹4-8 LPA (Internship: ₹15,000-25,000/month)",
                    companies: &["Google India", "Microsoft India", "Amazon India", "Flipkart", "Paytm"],
                    growth: ["Junior Developer", "Senior Developer", "Tech Lead", "Engineering Manager"],
                    tips: ["Practice coding problems on LeetCode", "Build 2-3 portfolio projects", "Learn system design basics"],
                }
                .build(),
                Entry {
                    key: "Backend Development",
                    role: "Backend Engineer",
                    match_score: 90,
                    description: "Develop robust server-side systems, APIs, and databases",
                    why: "Backend engineering is crucial for scalable applications. Your CS background gives you the foundation to excel in this role.",
                    skills: ["Python/Java", "REST APIs", "PostgreSQL", "Docker", "Microservices"],
                    salary: "₹3.5-7 LPA (Internship: ₹12,000-20,000/month)",
                    companies: &["Infosys", "TCS", "Wipro", "Amazon India", "Microsoft India"],
                    growth: ["Junior Backend Developer", "Senior Backend Developer", "Tech Architect", "Principal Engineer"],
                    tips: ["Master database design", "Understand API design patterns", "Learn about scalability"],
                }
                .build(),
                Entry {
                    key: "AI/ML",
                    role: "Machine Learning Engineer",
                    match_score: 88,
                    description: "Build AI/ML models and deploy them to production",
                    why: "AI/ML is one of the most in-demand fields. Your CS background and interest in AI/ML make this an excellent career path.",
                    skills: ["Python", "TensorFlow/PyTorch", "Data Analysis", "SQL", "Statistics"],
                    salary: "₹4-9 LPA (Internship: ₹20,000-30,000/month)",
                    companies: &["Google India", "Microsoft India", "Amazon India", "Flipkart", "Unacademy"],
                    growth: ["ML Engineer", "Senior ML Engineer", "ML Architect", "Research Scientist"],
                    tips: ["Build ML projects", "Understand algorithms deeply", "Practice on Kaggle competitions"],
                }
                .build(),
            ],
        ),
        (
            Branch::ElectronicsCommunication,
            vec![
                Entry {
                    key: "Embedded Systems",
                    role: "Embedded Systems Engineer",
                    match_score: 94,
                    description: "Develop firmware and embedded software for IoT and hardware devices",
                    why: "Your EC background is perfect for embedded systems. This is a high-demand field with excellent career prospects in India.",
                    skills: ["C/C++", "Microcontroller Programming", "RTOS", "Hardware Interfacing", "VHDL"],
                    salary: "₹3-6.5 LPA (Internship: ₹12,000-18,000/month)",
                    companies: &["Intel India", "Qualcomm", "Broadcom", "Texas Instruments", "STMicroelectronics"],
                    growth: ["Embedded Engineer", "Senior Embedded Engineer", "Firmware Architect", "Hardware Design Lead"],
                    tips: ["Master C/C++ fundamentals", "Understand microcontroller datasheets", "Build IoT projects"],
                }
                .build(),
                Entry {
                    key: "IoT Development",
                    role: "IoT Developer",
                    match_score: 91,
                    description: "Build Internet of Things applications connecting devices and sensors",
                    why: "IoT is growing rapidly in India. Your EC knowledge combined with software skills makes you ideal for this role.",
                    skills: ["Python", "Arduino/Raspberry Pi", "MQTT", "Cloud Platforms", "Sensor Integration"],
                    salary: "₹3.5-7 LPA (Internship: ₹13,000-19,000/month)",
                    companies: &["Bosch India", "Siemens India", "GE India", "Honeywell India", "Cisco India"],
                    growth: ["IoT Developer", "Senior IoT Engineer", "IoT Architect", "Product Manager"],
                    tips: ["Build IoT prototypes", "Understand cloud platforms", "Learn wireless protocols"],
                }
                .build(),
                Entry {
                    key: "VLSI Design",
                    role: "VLSI Design Engineer",
                    match_score: 89,
                    description: "Design and optimize integrated circuits and digital systems",
                    why: "VLSI is a specialized field with strong demand. Your EC background makes this a natural fit.",
                    skills: ["Verilog/VHDL", "Cadence Tools", "Digital Design", "Simulation", "Layout Design"],
                    salary: "₹3.5-7.5 LPA (Internship: ₹15,000-22,000/month)",
                    companies: &["Intel India", "Qualcomm", "AMD", "Nvidia", "Broadcom"],
                    growth: ["VLSI Engineer", "Senior VLSI Engineer", "Design Lead", "Principal Engineer"],
                    tips: ["Master Verilog/VHDL", "Practice design problems", "Learn EDA tools"],
                }
                .build(),
            ],
        ),
        (
            Branch::Mechanical,
            vec![
                Entry {
                    key: "CAD Design",
                    role: "CAD/Design Engineer",
                    match_score: 93,
                    description: "Create detailed technical drawings and 3D models for manufacturing",
                    why: "CAD design is fundamental in mechanical engineering. Your skills directly apply to this high-demand role.",
                    skills: ["CATIA/SolidWorks", "AutoCAD", "ANSYS", "GD&T", "Manufacturing Processes"],
                    salary: "₹2.5-5.5 LPA (Internship: ₹10,000-15,000/month)",
                    companies: &["Bosch India", "Siemens India", "GE India", "Mahindra & Mahindra", "Maruti Suzuki"],
                    growth: ["CAD Engineer", "Senior Design Engineer", "Design Lead", "Engineering Manager"],
                    tips: ["Master CAD software", "Understand manufacturing constraints", "Build portfolio projects"],
                }
                .build(),
                Entry {
                    key: "Mechanical Design",
                    role: "Mechanical Design Engineer",
                    match_score: 91,
                    description: "Design mechanical systems and components for various applications",
                    why: "Mechanical design is core to your field. This role offers excellent growth opportunities in Indian manufacturing.",
                    skills: ["Design Principles", "ANSYS FEA", "Material Science", "Thermodynamics", "CAD"],
                    salary: "₹2.5-5 LPA (Internship: ₹9,000-14,000/month)",
                    companies: &["Bharat Heavy Electricals", "Larsen & Toubro", "Godrej & Boyce", "Timken India", "SKF India"],
                    growth: ["Design Engineer", "Senior Design Engineer", "Project Lead", "Chief Engineer"],
                    tips: ["Understand design principles", "Practice FEA analysis", "Learn manufacturing standards"],
                }
                .build(),
                Entry {
                    key: "Manufacturing Engineering",
                    role: "Manufacturing Engineer",
                    match_score: 88,
                    description: "Optimize manufacturing processes and production efficiency",
                    why: "Manufacturing engineering is crucial for Indian industries. This role combines design and production expertise.",
                    skills: ["Process Optimization", "Lean Manufacturing", "Six Sigma", "Quality Control", "Production Planning"],
                    salary: "₹2.5-5.5 LPA (Internship: ₹10,000-16,000/month)",
                    companies: &["Maruti Suzuki", "Hyundai Motor", "Hero MotoCorp", "Bajaj Auto", "TVS Motor"],
                    growth: ["Manufacturing Engineer", "Senior Manufacturing Engineer", "Plant Manager", "Operations Head"],
                    tips: ["Learn Lean Six Sigma", "Understand production systems", "Study case studies"],
                }
                .build(),
            ],
        ),
        (
            Branch::Civil,
            vec![
                Entry {
                    key: "Structural Design",
                    role: "Structural Engineer",
                    match_score: 92,
                    description: "Design and analyze building structures and infrastructure projects",
                    why: "Structural engineering is fundamental in civil engineering. India's infrastructure boom creates excellent opportunities.",
                    skills: ["STAAD Pro", "AutoCAD", "Structural Analysis", "Building Codes", "Revit"],
                    salary: "₹2.5-5 LPA (Internship: ₹9,000-14,000/month)",
                    companies: &["Larsen & Toubro", "Godrej & Boyce", "Shapoorji Pallonji", "Tata Projects", "HCC"],
                    growth: ["Structural Engineer", "Senior Structural Engineer", "Project Lead", "Chief Engineer"],
                    tips: ["Master STAAD Pro", "Understand building codes", "Study famous structures"],
                }
                .build(),
                Entry {
                    key: "Project Management",
                    role: "Project Manager",
                    match_score: 89,
                    description: "Manage construction projects, teams, and resources",
                    why: "Project management is critical in civil engineering. This role offers leadership and growth opportunities.",
                    skills: ["Project Planning", "Resource Management", "Risk Management", "Communication", "MS Project"],
                    salary: "₹3-6 LPA (Internship: ₹12,000-18,000/month)",
                    companies: &["Larsen & Toubro", "Reliance Infrastructure", "DLF", "Lodha Group", "Oberoi Realty"],
                    growth: ["Project Manager", "Senior Project Manager", "Program Manager", "Director"],
                    tips: ["Learn project management tools", "Understand construction processes", "Study case studies"],
                }
                .build(),
                Entry {
                    key: "BIM Specialist",
                    role: "BIM Specialist",
                    match_score: 87,
                    description: "Implement Building Information Modeling in construction projects",
                    why: "BIM is the future of construction. This specialized role is in high demand with premium salaries.",
                    skills: ["Revit", "Navisworks", "BIM Coordination", "AutoCAD", "Project Management"],
                    salary: "₹3-6.5 LPA (Internship: ₹13,000-19,000/month)",
                    companies: &["Larsen & Toubro", "Godrej & Boyce", "Shapoorji Pallonji", "Tata Projects", "HCC"],
                    growth: ["BIM Coordinator", "BIM Manager", "BIM Director", "Digital Transformation Lead"],
                    tips: ["Master Revit", "Understand BIM workflows", "Learn coordination processes"],
                }
                .build(),
            ],
        ),
        (
            Branch::InformationTechnology,
            vec![
                Entry {
                    key: "Software Development",
                    role: "Software Developer",
                    match_score: 95,
                    description: "Develop enterprise software applications and solutions",
                    why: "Software development is your core strength. This role offers the best opportunities in India's IT industry.",
                    skills: ["Java/Python", "Spring Boot", "REST APIs", "SQL", "AWS"],
                    salary: "₹3.5-7.5 LPA (Internship: ₹15,000-25,000/month)",
                    companies: &["TCS", "Infosys", "Wipro", "HCL Technologies", "Tech Mahindra"],
                    growth: ["Software Developer", "Senior Developer", "Tech Lead", "Engineering Manager"],
                    tips: ["Practice coding problems", "Build portfolio projects", "Learn system design"],
                }
                .build(),
                Entry {
                    key: "DevOps Engineering",
                    role: "DevOps Engineer",
                    match_score: 91,
                    description: "Manage infrastructure and deployment pipelines",
                    why: "DevOps is in high demand with premium salaries. Your IT background makes this an excellent choice.",
                    skills: ["Docker", "Kubernetes", "CI/CD", "AWS/Azure", "Linux"],
                    salary: "₹4-8.5 LPA (Internship: ₹18,000-28,000/month)",
                    companies: &["Google India", "Microsoft India", "Amazon India", "Flipkart", "Swiggy"],
                    growth: ["DevOps Engineer", "Senior DevOps Engineer", "Infrastructure Lead", "Platform Architect"],
                    tips: ["Master Docker & Kubernetes", "Learn cloud platforms", "Understand CI/CD pipelines"],
                }
                .build(),
                Entry {
                    key: "Cloud Architecture",
                    role: "Cloud Architect",
                    match_score: 89,
                    description: "Design and implement cloud solutions for enterprises",
                    why: "Cloud architecture is one of the highest-paying roles. Your IT skills position you well for this career.",
                    skills: ["AWS/Azure/GCP", "Cloud Design", "Security", "Scalability", "Cost Optimization"],
                    salary: "₹5-10 LPA (Internship: ₹20,000-30,000/month)",
                    companies: &["Google India", "Microsoft India", "Amazon India", "Accenture", "Deloitte"],
                    growth: ["Cloud Engineer", "Cloud Architect", "Principal Architect", "VP Engineering"],
                    tips: ["Master cloud platforms", "Learn architecture patterns", "Study case studies"],
                }
                .build(),
            ],
        ),
        (
            Branch::Other,
            vec![
                Entry {
                    key: "Software Engineering",
                    role: "Software Engineer",
                    match_score: 85,
                    description: "Build software solutions across various domains",
                    why: "Software engineering is a versatile field with excellent opportunities. Start here and specialize later.",
                    skills: ["Python/Java", "Data Structures", "Algorithms", "Git", "Testing"],
                    salary: "₹2.5-5 LPA (Internship: ₹10,000-18,000/month)",
                    companies: &["Various IT Companies", "Startups", "Consulting Firms", "Product Companies"],
                    growth: ["Software Engineer", "Senior Engineer", "Tech Lead", "Engineering Manager"],
                    tips: ["Build foundational skills", "Create portfolio projects", "Practice problem-solving"],
                }
                .build(),
                Entry {
                    key: "Data Analysis",
                    role: "Data Analyst",
                    match_score: 80,
                    description: "Analyze data and provide business insights",
                    why: "Data analysis is growing rapidly. This role bridges technical and business domains.",
                    skills: ["SQL", "Python", "Excel", "Tableau/Power BI", "Statistics"],
                    salary: "₹2.5-5.5 LPA (Internship: ₹10,000-16,000/month)",
                    companies: &["Amazon India", "Flipkart", "Swiggy", "Paytm", "Analytics Firms"],
                    growth: ["Data Analyst", "Senior Analyst", "Analytics Manager", "Chief Data Officer"],
                    tips: ["Learn SQL deeply", "Master visualization tools", "Understand statistics"],
                }
                .build(),
                Entry {
                    key: "Technical Support",
                    role: "Technical Support Engineer",
                    match_score: 75,
                    description: "Provide technical support and troubleshooting",
                    why: "Technical support is a good entry point. Gain experience and transition to development roles.",
                    skills: ["Troubleshooting", "Communication", "Customer Service", "Documentation", "Technical Knowledge"],
                    salary: "₹1.5-3.5 LPA (Internship: ₹8,000-12,000/month)",
                    companies: &["Various IT Companies", "Support Centers", "Product Companies"],
                    growth: ["Support Engineer", "Senior Support Engineer", "Support Manager", "Technical Lead"],
                    tips: ["Develop soft skills", "Learn troubleshooting", "Understand products deeply"],
                }
                .build(),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_returns_first_other_entry() {
        let suggestion = suggest_role("Other", "", "");
        assert_eq!(suggestion.role, "Software Engineer");
    }

    #[test]
    fn skills_text_is_ignored() {
        let a = suggest_role("Computer Science & Engineering", "Python, SQL", "backend");
        let b = suggest_role("Computer Science & Engineering", "Verilog", "backend");
        assert_eq!(a, b);
    }

    #[test]
    fn keyword_overlap_lifts_lower_base_score() {
        // 90 * 1.1 = 99 beats the untouched 95.
        let suggestion = suggest_role("Computer Science & Engineering", "", "Backend");
        assert_eq!(suggestion.role, "Backend Engineer");
    }

    #[test]
    fn keyword_counts_once_across_key_role_and_description() {
        let entry = &suggestions_for("Computer Science & Engineering")[0];
        assert_eq!(keyword_matches(&interest_keywords("web"), entry), 1);
        assert_eq!(keyword_matches(&interest_keywords(" Web , stack, nothing"), entry), 2);
    }

    #[test]
    fn unknown_and_chemical_branches_fall_back_to_other() {
        assert_eq!(suggest_role("Aerospace", "", "data").role, "Data Analyst");
        assert_eq!(suggestions_for("Chemical Engineering")[0].role, "Software Engineer");
    }

    #[test]
    fn equal_matches_leave_base_order_intact() {
        // Both entries gain one match; 95 * 1.1 still beats 91 * 1.1.
        let suggestion = suggest_role("Information Technology", "", "engineer, develop");
        assert_eq!(suggestion.role, "Software Developer");
    }

    #[test]
    fn keywords_are_trimmed_lowercased_and_non_empty() {
        assert_eq!(interest_keywords(" AI/ML ,, Web "), vec!["ai/ml", "web"]);
        assert!(interest_keywords("").is_empty());
    }
}
