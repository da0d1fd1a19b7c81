use once_cell::sync::Lazy;

use crate::models::{Branch, InternshipMatch, LearningMilestone, MarketDemand, RoleRecord};

static ROLE_DATABASE: Lazy<Vec<(Branch, Vec<RoleRecord>)>> = Lazy::new(build_role_database);

/// Roles authored for a branch, in table order.
pub fn roles_for(branch: Branch) -> &'static [RoleRecord] {
    ROLE_DATABASE
        .iter()
        .find(|(key, _)| *key == branch)
        .or_else(|| ROLE_DATABASE.iter().find(|(key, _)| *key == Branch::Other))
        .map(|(_, roles)| roles.as_slice())
        .unwrap_or(&[])
}

pub fn find_role(name: &str) -> Option<(Branch, &'static RoleRecord)> {
    let needle = name.trim().to_lowercase();
    ROLE_DATABASE.iter().find_map(|(branch, roles)| {
        roles
            .iter()
            .find(|record| record.role.to_lowercase() == needle)
            .map(|record| (*branch, record))
    })
}

pub fn learning_timeline(record: &RoleRecord) -> &[LearningMilestone] {
    &record.learning_roadmap
}

pub fn matching_internships(record: &RoleRecord) -> &[InternshipMatch] {
    &record.matching_internships
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn milestone(
    month: u8,
    title: &str,
    skills: &[&str],
    projects: &[&str],
    certifications: &[&str],
) -> LearningMilestone {
    LearningMilestone {
        month,
        title: title.to_string(),
        skills: strings(skills),
        projects: strings(projects),
        certifications: strings(certifications),
    }
}

struct Posting<'a> {
    title: &'a str,
    company: &'a str,
    location: &'a str,
    duration: &'a str,
    stipend: &'a str,
    match_score: u8,
    required: &'a [&'a str],
    needed: &'a [&'a str],
}

impl Posting<'_> {
    fn build(self) -> InternshipMatch {
        InternshipMatch {
            title: self.title.to_string(),
            company: self.company.to_string(),
            location: self.location.to_string(),
            duration: self.duration.to_string(),
            stipend: self.stipend.to_string(),
            match_score: self.match_score,
            required_skills: strings(self.required),
            skills_you_have: Vec::new(),
            skills_needed: strings(self.needed),
        }
    }
}

fn build_role_database() -> Vec<(Branch, Vec<RoleRecord>)> {
    vec![
        (Branch::ComputerScience, computer_science_roles()),
        (Branch::ElectronicsCommunication, electronics_roles()),
        (Branch::Mechanical, mechanical_roles()),
        (Branch::Civil, civil_roles()),
        (Branch::InformationTechnology, information_technology_roles()),
        (Branch::Chemical, chemical_roles()),
        (Branch::Other, other_roles()),
    ]
}

fn computer_science_roles() -> Vec<RoleRecord> {
    vec![
        RoleRecord {
            role: "Full Stack Developer".into(),
            market_demand: MarketDemand::VeryHigh,
            description: "Build end-to-end web applications using modern frameworks and technologies".into(),
            salary_range: "₹4-8 LPA (Internship: ₹15,000-25,000/month)".into(),
            top_companies: strings(&["Google India", "Microsoft India", "Amazon India", "Flipkart", "Paytm"]),
            growth_path: strings(&["Junior Developer", "Senior Developer", "Tech Lead", "Engineering Manager"]),
            learning_roadmap: vec![
                milestone(1, "Frontend Fundamentals", &["HTML5", "CSS3", "JavaScript ES6+"], &["Portfolio Website", "Todo App"], &["HTML/CSS Basics"]),
                milestone(3, "React Mastery", &["React.js", "State Management", "Hooks"], &["E-commerce UI", "Social Media Feed"], &["React Developer Certificate"]),
                milestone(5, "Backend Development", &["Node.js", "Express.js", "REST APIs"], &["Blog API", "User Authentication System"], &["Node.js Developer Certificate"]),
                milestone(7, "Database & DevOps", &["MongoDB", "PostgreSQL", "Docker", "AWS"], &["Full Stack E-commerce", "Deployment Pipeline"], &["AWS Certified Cloud Practitioner"]),
            ],
            matching_internships: vec![
                Posting {
                    title: "Web Development Intern",
                    company: "Google India",
                    location: "Bangalore",
                    duration: "3 months",
                    stipend: "₹25,000/month",
                    match_score: 95,
                    required: &["React", "Node.js", "MongoDB"],
                    needed: &["React", "Node.js", "MongoDB"],
                }
                .build(),
                Posting {
                    title: "Frontend Developer Intern",
                    company: "Flipkart",
                    location: "Bangalore",
                    duration: "2 months",
                    stipend: "₹20,000/month",
                    match_score: 90,
                    required: &["React", "JavaScript", "CSS"],
                    needed: &["React"],
                }
                .build(),
            ],
            interview_tips: strings(&[
                "Build 3-5 portfolio projects showcasing full stack capabilities",
                "Master JavaScript fundamentals and async programming",
                "Practice system design and API design patterns",
                "Understand database optimization and indexing",
                "Learn Docker and basic DevOps concepts",
            ]),
        },
        RoleRecord {
            role: "Data Scientist".into(),
            market_demand: MarketDemand::VeryHigh,
            description: "Build AI/ML models and extract insights from data".into(),
            salary_range: "₹4-9 LPA (Internship: ₹20,000-30,000/month)".into(),
            top_companies: strings(&["Google India", "Microsoft India", "Amazon India", "Flipkart", "Unacademy"]),
            growth_path: strings(&["Data Scientist", "Senior Data Scientist", "ML Architect", "Research Scientist"]),
            learning_roadmap: vec![
                milestone(1, "Python & Statistics Basics", &["Python", "Pandas", "NumPy", "Statistics"], &["Data Analysis Project", "Statistical Analysis"], &["Python for Data Science"]),
                milestone(3, "Machine Learning Fundamentals", &["Scikit-learn", "Supervised Learning", "Unsupervised Learning"], &["Classification Model", "Clustering Analysis"], &["ML Basics Certificate"]),
                milestone(5, "Deep Learning", &["TensorFlow", "PyTorch", "Neural Networks"], &["Image Classification", "NLP Project"], &["Deep Learning Specialization"]),
                milestone(7, "Production ML", &["Model Deployment", "MLOps", "A/B Testing"], &["Production ML Pipeline", "Model Monitoring"], &["MLOps Engineer Certificate"]),
            ],
            matching_internships: vec![Posting {
                title: "Data Science Intern",
                company: "Amazon India",
                location: "Bangalore",
                duration: "3 months",
                stipend: "₹30,000/month",
                match_score: 92,
                required: &["Python", "Machine Learning", "SQL"],
                needed: &["Machine Learning"],
            }
            .build()],
            interview_tips: strings(&[
                "Master Python and SQL deeply",
                "Build end-to-end ML projects from data collection to deployment",
                "Understand statistical concepts and hypothesis testing",
                "Practice Kaggle competitions",
                "Learn about model evaluation metrics and validation techniques",
            ]),
        },
        RoleRecord {
            role: "Backend Engineer".into(),
            market_demand: MarketDemand::High,
            description: "Develop robust server-side systems, APIs, and databases".into(),
            salary_range: "₹3.5-7 LPA (Internship: ₹12,000-20,000/month)".into(),
            top_companies: strings(&["Infosys", "TCS", "Wipro", "Amazon India", "Microsoft India"]),
            growth_path: strings(&["Junior Backend Developer", "Senior Backend Developer", "Tech Architect", "Principal Engineer"]),
            learning_roadmap: vec![
                milestone(1, "Core Backend Concepts", &["Java/Python", "OOP", "Data Structures"], &["Console Applications", "Basic Server"], &["Java/Python Fundamentals"]),
                milestone(3, "Web Frameworks", &["Spring Boot/Django", "REST APIs", "Middleware"], &["REST API Development", "Authentication System"], &["Spring Boot Developer"]),
                milestone(5, "Database Design", &["SQL", "Database Design", "Query Optimization"], &["Complex Database Schema", "Performance Tuning"], &["SQL Advanced Certificate"]),
                milestone(7, "Scalability & DevOps", &["Microservices", "Docker", "Kubernetes", "AWS"], &["Microservices Architecture", "CI/CD Pipeline"], &["AWS Solutions Architect"]),
            ],
            matching_internships: vec![Posting {
                title: "Backend Developer Intern",
                company: "Microsoft India",
                location: "Hyderabad",
                duration: "3 months",
                stipend: "₹18,000/month",
                match_score: 88,
                required: &["Java", "Spring Boot", "SQL"],
                needed: &["Spring Boot"],
            }
            .build()],
            interview_tips: strings(&[
                "Master a backend language (Java/Python) thoroughly",
                "Understand database design and optimization",
                "Learn about API design patterns and REST principles",
                "Practice system design interviews",
                "Understand concurrency and multithreading",
            ]),
        },
    ]
}

fn electronics_roles() -> Vec<RoleRecord> {
    vec![
        RoleRecord {
            role: "Embedded Systems Engineer".into(),
            market_demand: MarketDemand::High,
            description: "Develop firmware and embedded software for IoT and hardware devices".into(),
            salary_range: "₹3-6.5 LPA (Internship: ₹12,000-18,000/month)".into(),
            top_companies: strings(&["Intel India", "Qualcomm", "Broadcom", "Texas Instruments", "STMicroelectronics"]),
            growth_path: strings(&["Embedded Engineer", "Senior Embedded Engineer", "Firmware Architect", "Hardware Design Lead"]),
            learning_roadmap: vec![
                milestone(1, "C/C++ Fundamentals", &["C Programming", "Pointers", "Memory Management"], &["Console Programs", "Data Structure Implementation"], &["C Programming Basics"]),
                milestone(3, "Microcontroller Programming", &["Arduino", "STM32", "Embedded C"], &["LED Blink", "Sensor Integration"], &["Arduino Developer Certificate"]),
                milestone(5, "IoT & Communication Protocols", &["UART", "SPI", "I2C", "WiFi/BLE"], &["IoT Device", "Wireless Communication"], &["IoT Fundamentals"]),
                milestone(7, "RTOS & Advanced Topics", &["RTOS", "Real-time Systems", "Debugging"], &["Multi-tasking System", "Production Firmware"], &["RTOS Developer Certificate"]),
            ],
            matching_internships: vec![Posting {
                title: "Embedded Systems Intern",
                company: "Qualcomm",
                location: "Hyderabad",
                duration: "3 months",
                stipend: "₹16,000/month",
                match_score: 90,
                required: &["C/C++", "Microcontroller", "Embedded Systems"],
                needed: &["Microcontroller"],
            }
            .build()],
            interview_tips: strings(&[
                "Master C/C++ and embedded C",
                "Understand microcontroller architecture and datasheets",
                "Build IoT projects from scratch",
                "Learn debugging techniques and tools",
                "Understand real-time systems and RTOS",
            ]),
        },
        RoleRecord {
            role: "IoT Developer".into(),
            market_demand: MarketDemand::Growing,
            description: "Build Internet of Things applications connecting devices and sensors".into(),
            salary_range: "₹3.5-7 LPA (Internship: ₹13,000-19,000/month)".into(),
            top_companies: strings(&["Bosch India", "Siemens India", "GE India", "Honeywell India", "Cisco India"]),
            growth_path: strings(&["IoT Developer", "Senior IoT Engineer", "IoT Architect", "Product Manager"]),
            learning_roadmap: vec![
                milestone(1, "IoT Fundamentals", &["IoT Concepts", "Sensors", "Arduino/Raspberry Pi"], &["Temperature Sensor", "Light Control System"], &["IoT Basics"]),
                milestone(3, "Cloud Platforms", &["AWS IoT", "Azure IoT", "Google Cloud IoT"], &["Cloud Connected Device", "Data Dashboard"], &["AWS IoT Certified"]),
                milestone(5, "Communication & Security", &["MQTT", "CoAP", "IoT Security", "Encryption"], &["Secure IoT System", "Multi-device Network"], &["IoT Security Certificate"]),
                milestone(7, "Production IoT Systems", &["Edge Computing", "Analytics", "Scalability"], &["Smart Home System", "Industrial IoT Solution"], &["IoT Solutions Architect"]),
            ],
            matching_internships: vec![Posting {
                title: "IoT Developer Intern",
                company: "Bosch India",
                location: "Bangalore",
                duration: "3 months",
                stipend: "₹15,000/month",
                match_score: 87,
                required: &["Python", "IoT", "Cloud Platforms"],
                needed: &["Cloud Platforms"],
            }
            .build()],
            interview_tips: strings(&[
                "Build end-to-end IoT projects",
                "Understand cloud IoT platforms deeply",
                "Learn wireless protocols (WiFi, BLE, LoRaWAN)",
                "Master MQTT and IoT communication patterns",
                "Understand IoT security best practices",
            ]),
        },
    ]
}

fn mechanical_roles() -> Vec<RoleRecord> {
    vec![RoleRecord {
        role: "Mechanical Design Engineer".into(),
        market_demand: MarketDemand::High,
        description: "Design mechanical systems and components for various applications".into(),
        salary_range: "₹2.5-5 LPA (Internship: ₹9,000-14,000/month)".into(),
        top_companies: strings(&["Bharat Heavy Electricals", "Larsen & Toubro", "Godrej & Boyce", "Timken India", "SKF India"]),
        growth_path: strings(&["Design Engineer", "Senior Design Engineer", "Project Lead", "Chief Engineer"]),
        learning_roadmap: vec![
            milestone(1, "CAD Fundamentals", &["CATIA", "SolidWorks", "Basic Modeling"], &["Simple Parts", "Assemblies"], &["CAD Basics"]),
            milestone(3, "Advanced Modeling", &["Complex Assemblies", "Surfacing", "Sheet Metal"], &["Mechanical Components", "Product Design"], &["Advanced CAD"]),
            milestone(5, "Simulation & Analysis", &["ANSYS FEA", "CFD", "Stress Analysis"], &["Structural Analysis", "Thermal Analysis"], &["FEA Fundamentals"]),
            milestone(7, "Manufacturing & Optimization", &["Manufacturing Processes", "Cost Optimization", "GD&T"], &["Design for Manufacturing", "Optimization Study"], &["Manufacturing Engineer Certificate"]),
        ],
        matching_internships: vec![Posting {
            title: "Mechanical Design Intern",
            company: "Larsen & Toubro",
            location: "Mumbai",
            duration: "3 months",
            stipend: "₹12,000/month",
            match_score: 89,
            required: &["CATIA", "ANSYS", "Design"],
            needed: &["ANSYS"],
        }
        .build()],
        interview_tips: strings(&[
            "Master CAD software (CATIA/SolidWorks)",
            "Understand FEA and simulation concepts",
            "Learn manufacturing constraints and processes",
            "Build a strong portfolio of design projects",
            "Understand GD&T and technical drawings",
        ]),
    }]
}

fn civil_roles() -> Vec<RoleRecord> {
    vec![RoleRecord {
        role: "Structural Engineer".into(),
        market_demand: MarketDemand::High,
        description: "Design and analyze building structures and infrastructure projects".into(),
        salary_range: "₹2.5-5 LPA (Internship: ₹9,000-14,000/month)".into(),
        top_companies: strings(&["Larsen & Toubro", "Godrej & Boyce", "Shapoorji Pallonji", "Tata Projects", "HCC"]),
        growth_path: strings(&["Structural Engineer", "Senior Structural Engineer", "Project Lead", "Chief Engineer"]),
        learning_roadmap: vec![
            milestone(1, "Design Software Basics", &["STAAD Pro", "AutoCAD", "Basics"], &["Simple Structures", "Basic Drawings"], &["STAAD Pro Basics"]),
            milestone(3, "Structural Analysis", &["Load Analysis", "Stress Analysis", "Design Codes"], &["Building Analysis", "Bridge Design"], &["Structural Analysis Certificate"]),
            milestone(5, "Advanced Design", &["Reinforced Concrete", "Steel Design", "Optimization"], &["Complex Structure", "High-rise Building"], &["Advanced Structural Design"]),
            milestone(7, "BIM & Project Management", &["Revit", "BIM Coordination", "Project Management"], &["BIM Model", "Project Documentation"], &["BIM Specialist Certificate"]),
        ],
        matching_internships: vec![Posting {
            title: "Structural Engineer Intern",
            company: "Tata Projects",
            location: "Delhi",
            duration: "3 months",
            stipend: "₹11,000/month",
            match_score: 88,
            required: &["STAAD Pro", "Structural Design", "AutoCAD"],
            needed: &["STAAD Pro"],
        }
        .build()],
        interview_tips: strings(&[
            "Master STAAD Pro and design software",
            "Understand building codes and standards",
            "Learn structural analysis and design principles",
            "Build portfolio of structural designs",
            "Understand construction processes and site management",
        ]),
    }]
}

fn information_technology_roles() -> Vec<RoleRecord> {
    vec![RoleRecord {
        role: "Software Developer".into(),
        market_demand: MarketDemand::VeryHigh,
        description: "Develop enterprise software applications and solutions".into(),
        salary_range: "₹3.5-7.5 LPA (Internship: ₹15,000-25,000/month)".into(),
        top_companies: strings(&["TCS", "Infosys", "Wipro", "HCL Technologies", "Tech Mahindra"]),
        growth_path: strings(&["Software Developer", "Senior Developer", "Tech Lead", "Engineering Manager"]),
        learning_roadmap: vec![
            milestone(1, "Programming Fundamentals", &["Java/Python", "OOP", "Data Structures"], &["Console Applications", "Basic Programs"], &["Programming Basics"]),
            milestone(3, "Web Development", &["Web Frameworks", "Databases", "APIs"], &["Web Application", "REST API"], &["Web Developer Certificate"]),
            milestone(5, "Advanced Concepts", &["Design Patterns", "Testing", "Deployment"], &["Enterprise Application", "Microservices"], &["Software Architect Certificate"]),
            milestone(7, "Cloud & DevOps", &["Cloud Platforms", "CI/CD", "Containers"], &["Cloud Application", "DevOps Pipeline"], &["Cloud Architect Certificate"]),
        ],
        matching_internships: vec![Posting {
            title: "Software Developer Intern",
            company: "TCS",
            location: "Pune",
            duration: "3 months",
            stipend: "₹15,000/month",
            match_score: 91,
            required: &["Java", "SQL", "Web Development"],
            needed: &["Web Development"],
        }
        .build()],
        interview_tips: strings(&[
            "Master a programming language thoroughly",
            "Build 3-5 real-world projects",
            "Understand design patterns and best practices",
            "Practice coding interviews on LeetCode",
            "Learn about software development lifecycle",
        ]),
    }]
}

fn chemical_roles() -> Vec<RoleRecord> {
    vec![
        RoleRecord {
            role: "Process Data Scientist".into(),
            market_demand: MarketDemand::Growing,
            description: "Use AI/ML to optimize chemical processes and improve efficiency".into(),
            salary_range: "₹4-8 LPA (Internship: ₹18,000-25,000/month)".into(),
            top_companies: strings(&["BASF India", "Reliance Industries", "Hindustan Unilever", "Dow Chemical", "Bayer India"]),
            growth_path: strings(&["Process Data Scientist", "Senior Data Scientist", "Process Optimization Lead", "Chief Scientist"]),
            learning_roadmap: vec![
                milestone(1, "Python & Data Fundamentals", &["Python", "Pandas", "NumPy", "Data Analysis"], &["Process Data Analysis", "Statistical Analysis"], &["Python for Data Science"]),
                milestone(3, "Machine Learning for Processes", &["Scikit-learn", "Predictive Modeling", "Optimization"], &["Yield Prediction", "Quality Control Model"], &["ML for Process Industries"]),
                milestone(5, "Advanced Analytics", &["Deep Learning", "Time Series Analysis", "Anomaly Detection"], &["Process Anomaly Detection", "Predictive Maintenance"], &["Advanced Analytics Certificate"]),
                milestone(7, "Production Deployment", &["MLOps", "Real-time Analytics", "Dashboarding"], &["Production ML Pipeline", "Real-time Monitoring"], &["MLOps Engineer Certificate"]),
            ],
            matching_internships: vec![Posting {
                title: "Process Data Science Intern",
                company: "Reliance Industries",
                location: "Jamnagar",
                duration: "3 months",
                stipend: "₹22,000/month",
                match_score: 93,
                required: &["Python", "Machine Learning", "Process Knowledge"],
                needed: &["Machine Learning"],
            }
            .build()],
            interview_tips: strings(&[
                "Combine chemical engineering knowledge with data science",
                "Master Python and ML libraries",
                "Understand process optimization and control",
                "Learn about industrial IoT and sensors",
                "Build projects combining process and data science",
            ]),
        },
        RoleRecord {
            role: "AI Engineer – Process Automation".into(),
            market_demand: MarketDemand::VeryHigh,
            description: "Develop AI solutions for automating chemical processes".into(),
            salary_range: "₹5-9 LPA (Internship: ₹20,000-28,000/month)".into(),
            top_companies: strings(&["BASF India", "Reliance Industries", "Hindustan Unilever", "Dow Chemical", "Bayer India"]),
            growth_path: strings(&["AI Engineer", "Senior AI Engineer", "AI Architect", "Chief AI Officer"]),
            learning_roadmap: vec![
                milestone(1, "AI & Automation Basics", &["Python", "RPA Concepts", "Process Automation"], &["Simple Automation", "Bot Development"], &["RPA Fundamentals"]),
                milestone(3, "Deep Learning & Computer Vision", &["TensorFlow", "Computer Vision", "Image Processing"], &["Quality Control AI", "Visual Inspection System"], &["Computer Vision Specialist"]),
                milestone(5, "Advanced AI Systems", &["NLP", "Reinforcement Learning", "Robotics"], &["Intelligent Control System", "Predictive Maintenance"], &["Advanced AI Systems"]),
                milestone(7, "Production AI Systems", &["AI Deployment", "Edge AI", "Real-time Processing"], &["Production AI System", "Autonomous Control"], &["AI Solutions Architect"]),
            ],
            matching_internships: vec![Posting {
                title: "AI Engineer Intern",
                company: "BASF India",
                location: "Mumbai",
                duration: "3 months",
                stipend: "₹25,000/month",
                match_score: 94,
                required: &["Python", "Deep Learning", "Automation"],
                needed: &["Deep Learning"],
            }
            .build()],
            interview_tips: strings(&[
                "Master deep learning frameworks",
                "Understand process automation and RPA",
                "Learn computer vision for quality control",
                "Build AI projects for industrial applications",
                "Understand edge AI and real-time systems",
            ]),
        },
    ]
}

fn other_roles() -> Vec<RoleRecord> {
    vec![RoleRecord {
        role: "Software Engineer".into(),
        market_demand: MarketDemand::VeryHigh,
        description: "Build software solutions across various domains".into(),
        salary_range: "₹2.5-5 LPA (Internship: ₹10,000-18,000/month)".into(),
        top_companies: strings(&["Various IT Companies", "Startups", "Consulting Firms", "Product Companies"]),
        growth_path: strings(&["Software Engineer", "Senior Engineer", "Tech Lead", "Engineering Manager"]),
        learning_roadmap: vec![
            milestone(1, "Programming Basics", &["Python/Java", "Data Structures", "Algorithms"], &["Console Programs", "Coding Challenges"], &["Programming Fundamentals"]),
            milestone(3, "Web Development", &["HTML/CSS", "JavaScript", "Web Frameworks"], &["Website", "Web Application"], &["Web Developer Basics"]),
            milestone(5, "Backend Development", &["Backend Framework", "Databases", "APIs"], &["REST API", "Database Application"], &["Backend Developer Certificate"]),
            milestone(7, "Full Stack Development", &["Full Stack", "Deployment", "DevOps Basics"], &["Full Stack Application", "Production Deployment"], &["Full Stack Developer Certificate"]),
        ],
        matching_internships: vec![Posting {
            title: "Software Developer Intern",
            company: "Startup",
            location: "Bangalore",
            duration: "2 months",
            stipend: "₹12,000/month",
            match_score: 85,
            required: &["Programming", "Web Development", "Problem Solving"],
            needed: &["Web Development"],
        }
        .build()],
        interview_tips: strings(&[
            "Build foundational programming skills",
            "Create portfolio projects",
            "Practice problem-solving",
            "Learn web development basics",
            "Understand software development best practices",
        ]),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_branch_has_roles() {
        for branch in Branch::ALL {
            assert!(!roles_for(branch).is_empty(), "{branch} has no roles");
        }
    }

    #[test]
    fn every_roadmap_has_four_milestones_on_odd_months() {
        for branch in Branch::ALL {
            for record in roles_for(branch) {
                let months: Vec<u8> = learning_timeline(record).iter().map(|m| m.month).collect();
                assert_eq!(months, vec![1, 3, 5, 7], "{}", record.role);
            }
        }
    }

    #[test]
    fn table_order_is_preserved() {
        let names: Vec<&str> = roles_for(Branch::ComputerScience)
            .iter()
            .map(|record| record.role.as_str())
            .collect();
        assert_eq!(names, vec!["Full Stack Developer", "Data Scientist", "Backend Engineer"]);
    }

    #[test]
    fn find_role_ignores_case_and_reports_branch() {
        let (branch, record) = find_role("iot developer").unwrap();
        assert_eq!(branch, Branch::ElectronicsCommunication);
        assert_eq!(record.market_demand, MarketDemand::Growing);
        assert_eq!(matching_internships(record)[0].company, "Bosch India");
        assert!(find_role("Astronaut").is_none());
    }
}
