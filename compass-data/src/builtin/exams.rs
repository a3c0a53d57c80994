//! The shipped entrance examination list.

use compass_core::CareerIcon;

use crate::EntranceExam;

struct ExamRecord {
    id: &'static str,
    name: &'static str,
    full_name: &'static str,
    description: &'static str,
    fields: &'static [&'static str],
    icon: CareerIcon,
}

const EXAMS: [ExamRecord; 7] = [
    ExamRecord {
        id: "jee-main",
        name: "JEE Main",
        full_name: "Joint Entrance Examination Main",
        description: "National level examination for admission to undergraduate engineering \
            programs at NITs, IIITs, and other Centrally Funded Technical Institutions across \
            India.",
        fields: &["Engineering", "Technology", "Architecture"],
        icon: CareerIcon::PenTool,
    },
    ExamRecord {
        id: "jee-advanced",
        name: "JEE Advanced",
        full_name: "Joint Entrance Examination Advanced",
        description: "Entrance examination for admission to 23 Indian Institutes of Technology \
            (IITs) across India. Top rankers of JEE Main are eligible to appear.",
        fields: &["Engineering", "Technology", "Architecture", "Science"],
        icon: CareerIcon::Award,
    },
    ExamRecord {
        id: "neet",
        name: "NEET",
        full_name: "National Eligibility cum Entrance Test",
        description: "Entrance examination for admission to MBBS, BDS, AYUSH, and other medical \
            courses in India.",
        fields: &["Medicine", "Dentistry", "Ayurveda", "Homeopathy"],
        icon: CareerIcon::Activity,
    },
    ExamRecord {
        id: "clat",
        name: "CLAT",
        full_name: "Common Law Admission Test",
        description: "Entrance examination for admission to undergraduate and postgraduate law \
            programs in National Law Universities across India.",
        fields: &["Law"],
        icon: CareerIcon::Scale,
    },
    ExamRecord {
        id: "cat",
        name: "CAT",
        full_name: "Common Admission Test",
        description: "Entrance examination for admission to postgraduate management programs \
            at Indian Institutes of Management (IIMs) and other management institutes in India.",
        fields: &["Management", "Business Administration"],
        icon: CareerIcon::Briefcase,
    },
    ExamRecord {
        id: "gate",
        name: "GATE",
        full_name: "Graduate Aptitude Test in Engineering",
        description: "Examination for admission to postgraduate programs in engineering and \
            technology across India and for recruitment in public sector companies.",
        fields: &["Engineering", "Technology", "Science"],
        icon: CareerIcon::Zap,
    },
    ExamRecord {
        id: "cucet",
        name: "CUCET",
        full_name: "Central Universities Common Entrance Test",
        description: "Entrance examination for admission to undergraduate, postgraduate, and \
            research programs in central universities across India.",
        fields: &["Arts", "Science", "Commerce", "Humanities"],
        icon: CareerIcon::BookOpen,
    },
];

/// The seven shipped entrance examinations, in display order.
#[must_use]
pub fn entrance_exams() -> Vec<EntranceExam> {
    EXAMS
        .iter()
        .map(|record| EntranceExam {
            id: record.id.to_owned(),
            name: record.name.to_owned(),
            full_name: record.full_name.to_owned(),
            description: record.description.to_owned(),
            fields: record.fields.iter().map(|field| (*field).to_owned()).collect(),
            icon: record.icon,
        })
        .collect()
}
