//! The shipped career catalog.

use compass_core::{Career, CareerCatalog, CareerIcon, CatalogError};

struct CareerRecord {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    skills: [&'static str; 4],
    salary: &'static str,
    growth: &'static str,
    education: &'static str,
    icon: CareerIcon,
}

const CAREERS: [CareerRecord; 6] = [
    CareerRecord {
        id: "software-developer",
        title: "Software Developer",
        description: "Design, develop, and maintain software applications across various \
            platforms. Work with programming languages, frameworks, and collaborate with \
            teams to build efficient solutions.",
        skills: ["Programming", "Problem Solving", "Algorithm Design", "Testing"],
        salary: "$110,000",
        growth: "22% (Much faster than average)",
        education: "Bachelor's degree in Computer Science or related field",
        icon: CareerIcon::Code,
    },
    CareerRecord {
        id: "data-scientist",
        title: "Data Scientist",
        description: "Analyze complex data to identify patterns and trends. Build models \
            using machine learning and statistical techniques to help organizations make \
            data-driven decisions.",
        skills: [
            "Statistics",
            "Machine Learning",
            "Programming",
            "Data Visualization",
        ],
        salary: "$122,000",
        growth: "36% (Much faster than average)",
        education: "Master's or PhD in Data Science, Statistics, or related field",
        icon: CareerIcon::BarChart,
    },
    CareerRecord {
        id: "ux-designer",
        title: "UX Designer",
        description: "Create intuitive, user-centered designs for digital products. Conduct \
            user research, develop wireframes, and collaborate with developers to implement \
            effective user experiences.",
        skills: ["User Research", "Wireframing", "Prototyping", "Visual Design"],
        salary: "$85,000",
        growth: "13% (Faster than average)",
        education: "Bachelor's degree in Design, HCI, or related field",
        icon: CareerIcon::Layout,
    },
    CareerRecord {
        id: "cybersecurity-analyst",
        title: "Cybersecurity Analyst",
        description: "Protect systems and networks from cyber threats. Monitor for security \
            breaches, implement security measures, and develop policies to safeguard digital \
            information.",
        skills: [
            "Network Security",
            "Threat Analysis",
            "Security Protocols",
            "Risk Assessment",
        ],
        salary: "$99,000",
        growth: "35% (Much faster than average)",
        education: "Bachelor's degree in Cybersecurity, Computer Science, or related field",
        icon: CareerIcon::Shield,
    },
    CareerRecord {
        id: "marketing-specialist",
        title: "Digital Marketing Specialist",
        description: "Develop and implement marketing strategies for digital platforms. \
            Manage social media, email campaigns, and analyze performance metrics to optimize \
            marketing efforts.",
        skills: ["Social Media", "Content Creation", "Analytics", "SEO"],
        salary: "$63,000",
        growth: "10% (Faster than average)",
        education: "Bachelor's degree in Marketing, Communications, or related field",
        icon: CareerIcon::Megaphone,
    },
    CareerRecord {
        id: "healthcare-administrator",
        title: "Healthcare Administrator",
        description: "Manage healthcare facilities, services, and staff. Ensure regulatory \
            compliance, quality patient care, and efficient operations of healthcare \
            organizations.",
        skills: [
            "Leadership",
            "Healthcare Regulations",
            "Budgeting",
            "Staff Management",
        ],
        salary: "$104,000",
        growth: "32% (Much faster than average)",
        education: "Bachelor's or Master's degree in Healthcare Administration or related \
            field",
        icon: CareerIcon::HeartPulse,
    },
];

/// Build the shipped catalog of six careers.
///
/// # Errors
/// Returns [`CatalogError`] if the compiled-in records are inconsistent.
pub fn careers() -> Result<CareerCatalog, CatalogError> {
    let careers = CAREERS
        .iter()
        .map(|record| {
            Career::new(record.id, record.title).map(|career| {
                career
                    .with_description(record.description)
                    .with_skills(record.skills)
                    .with_outlook(record.salary, record.growth)
                    .with_education(record.education)
                    .with_icon(record.icon)
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    CareerCatalog::new(careers)
}
