//! The canonical seed document used as initial state.

use crate::document::{
    Education, EntryId, Experience, LanguageSkill, PersonalInfo, Project, ResumeDocument,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

/// Build the default resume document every session starts from.
pub fn default_document() -> ResumeDocument {
    ResumeDocument {
        personal_info: PersonalInfo {
            name: "Takuro Akiyama".to_string(),
            location: "Golden Beach, QLD, Australia".to_string(),
            phone: "+61 405 726 234".to_string(),
            email: "akiyaman0212@gmail.com".to_string(),
            linkedin: "linkedin.com/in/takuro-akiyama-46477b221".to_string(),
        },
        summary: "Full-stack developer with experience building web applications using modern \
                  technologies including React, TypeScript, Python, and cloud services. \
                  Passionate about creating efficient solutions and continuously learning new \
                  technologies. International experience in Japan, the United States, and \
                  Australia with strong communication skills in English and Japanese."
            .to_string(),
        experience: vec![
            Experience {
                id: EntryId::new("1"),
                company: "Botanical Food Company Pty Ltd.".to_string(),
                location: "Palmwoods, QLD".to_string(),
                role: "Quality Checker".to_string(),
                start_date: "Dec 2024".to_string(),
                end_date: "Present".to_string(),
                bullets: strings(&[
                    "Collaborated with team members to identify and resolve production issues efficiently.",
                    "Followed strict quality and safety protocols under pressure.",
                    "Communicated effectively with supervisors and team leaders to ensure smooth operations.",
                ]),
            },
            Experience {
                id: EntryId::new("2"),
                company: "TEPCO Energy Partner, Inc.".to_string(),
                location: "Sapporo, Japan".to_string(),
                role: "Customer Support Assistant".to_string(),
                start_date: "Nov 2023".to_string(),
                end_date: "Jan 2024".to_string(),
                bullets: strings(&[
                    "Supported 200+ customers monthly by managing service requests and troubleshooting billing issues.",
                    "Reduced service completion time by 40% through improved communication with technicians.",
                    "Maintained accuracy and professionalism in handling customer data.",
                ]),
            },
        ],
        projects: vec![
            Project {
                id: EntryId::new("1"),
                name: "Auto Matcher".to_string(),
                technologies: strings(&[
                    "React",
                    "TypeScript",
                    "Node.js",
                    "Express",
                    "PostgreSQL",
                    "TanStack Query",
                ]),
                bullets: strings(&[
                    "Built a full-stack matching application with real-time data synchronization.",
                    "Implemented RESTful API with Express and PostgreSQL for data persistence.",
                    "Created responsive UI components using React and Tailwind CSS.",
                ]),
            },
            Project {
                id: EntryId::new("2"),
                name: "Charge Spotter".to_string(),
                technologies: strings(&[
                    "React",
                    "TypeScript",
                    "Google Maps API",
                    "Node.js",
                    "Express",
                ]),
                bullets: strings(&[
                    "Developed an EV charging station finder with interactive map integration.",
                    "Integrated Google Maps API for location services and directions.",
                    "Built search and filter functionality for optimal user experience.",
                ]),
            },
            Project {
                id: EntryId::new("3"),
                name: "Secure.zip".to_string(),
                technologies: strings(&["Python", "Cryptography", "Flask", "React", "TypeScript"]),
                bullets: strings(&[
                    "Created a secure file encryption and compression application.",
                    "Implemented AES encryption using Python cryptography libraries.",
                    "Built intuitive web interface for file upload and download operations.",
                ]),
            },
            Project {
                id: EntryId::new("4"),
                name: "YouTube Dual Subtitle".to_string(),
                technologies: strings(&["JavaScript", "Chrome Extension API", "HTML", "CSS"]),
                bullets: strings(&[
                    "Developed Chrome extension for displaying dual language subtitles on YouTube.",
                    "Utilized Chrome Extension APIs for seamless browser integration.",
                    "Enhanced language learning experience for multilingual users.",
                ]),
            },
            Project {
                id: EntryId::new("5"),
                name: "Celebrity Identify".to_string(),
                technologies: strings(&[
                    "Python",
                    "TensorFlow",
                    "OpenCV",
                    "Flask",
                    "Machine Learning",
                ]),
                bullets: strings(&[
                    "Built machine learning application for celebrity face recognition.",
                    "Trained neural network models using TensorFlow and image processing with OpenCV.",
                    "Created Flask backend API for model inference and predictions.",
                ]),
            },
        ],
        education: vec![
            Education {
                id: EntryId::new("1"),
                institution: "University of the People".to_string(),
                location: "USA (Online)".to_string(),
                degree: "Bachelor of Science in Computer Science".to_string(),
                date: "Oct 2024 - Present".to_string(),
                bullets: Vec::new(),
            },
            Education {
                id: EntryId::new("2"),
                institution: "Coursera".to_string(),
                location: "Online".to_string(),
                degree: "Google IT Support Certificate".to_string(),
                date: "Jul 2025 - Aug 2025".to_string(),
                bullets: Vec::new(),
            },
            Education {
                id: EntryId::new("3"),
                institution: "Coursera".to_string(),
                location: "Online".to_string(),
                degree: "CompTIA A+ Certification (Preparation)".to_string(),
                date: "Aug 2025 - Ongoing".to_string(),
                bullets: Vec::new(),
            },
        ],
        skills: strings(&[
            "JavaScript",
            "TypeScript",
            "React",
            "Node.js",
            "Express",
            "Python",
            "Flask",
            "TensorFlow",
            "PostgreSQL",
            "HTML/CSS",
            "Tailwind CSS",
            "Git",
            "REST APIs",
            "Chrome Extensions",
            "Google Maps API",
            "Machine Learning",
            "Windows",
            "macOS",
            "Ubuntu",
            "TCP/IP",
            "VPN",
        ]),
        languages: vec![
            LanguageSkill {
                language: "English".to_string(),
                level: "Highly Proficient".to_string(),
            },
            LanguageSkill {
                language: "Japanese".to_string(),
                level: "Native".to_string(),
            },
            LanguageSkill {
                language: "Korean".to_string(),
                level: "Beginner".to_string(),
            },
        ],
    }
}
