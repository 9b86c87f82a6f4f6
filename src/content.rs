//! Static page copy. Rendered as-is; nothing here has behavior.
//!
//! Links are absolute `https://` or `mailto:` URLs. Entries whose link is
//! not published carry `None` and render without it.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::state::sections::SectionId;

pub const OWNER_NAME: &str = "Maryam Mahmoudi";

pub const TAGLINE: &str =
    "Transforming data into intelligent solutions with cutting-edge AI and robust backend systems";

pub const HEADLINE_TITLES: &[&str] = &[
    "AI-Powered Backend Developer",
    "Data Scientist",
    "Machine Learning Engineer",
    "Python Developer",
];

pub const PORTRAIT_SRC: &str = "me.png";

pub const EMAIL: &str = "mahmoodi.maryam1993@gmail.com";
pub const MAILTO: &str = "mailto:mahmoodi.maryam1993@gmail.com";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/maryam-mahmoudi-8882857b/";
pub const GITHUB_URL: &str = "https://github.com/maryammahmoudi1993";
pub const MEDIUM_PROFILE_URL: &str = "https://medium.com/@mahmoodi.maryam1993";

/// Whether `href` leaves the site and should open in a new tab.
#[must_use]
pub fn opens_new_tab(href: &str) -> bool {
    href.starts_with("https://") || href.starts_with("http://")
}

// =============================================================================
// Section headers
// =============================================================================

#[derive(Clone, Copy, Debug)]
pub struct SectionCopy {
    pub id: SectionId,
    pub heading: &'static str,
    pub blurb: Option<&'static str>,
}

pub const ABOUT: SectionCopy = SectionCopy { id: SectionId::About, heading: "About Me", blurb: None };
pub const WRITING: SectionCopy = SectionCopy {
    id: SectionId::Writing,
    heading: "Latest Blog Posts",
    blurb: Some("Sharing insights and experiences from my journey in AI and data science"),
};
pub const SKILLS: SectionCopy = SectionCopy { id: SectionId::Skills, heading: "Technical Skills", blurb: None };
pub const WORK: SectionCopy = SectionCopy { id: SectionId::Work, heading: "Featured Projects", blurb: None };
pub const HISTORY: SectionCopy =
    SectionCopy { id: SectionId::History, heading: "Professional Experience", blurb: None };
pub const ACADEMICS: SectionCopy =
    SectionCopy { id: SectionId::Academics, heading: "Education & Achievements", blurb: None };
pub const REACH: SectionCopy = SectionCopy {
    id: SectionId::Reach,
    heading: "Get In Touch",
    blurb: Some(
        "I'm always interested in new opportunities and collaborations. \
         Let's discuss how we can work together to create something amazing!",
    ),
};

// =============================================================================
// About
// =============================================================================

pub const ABOUT_SUBHEADING: &str = "Passionate About AI & Backend Excellence";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a dedicated Data Scientist and Backend Developer with extensive expertise in AI and Machine Learning. \
     My passion lies in creating intelligent systems that solve real-world problems through innovative technology.",
    "With a strong foundation in Python, Django, and cutting-edge ML frameworks, I specialize in building \
     scalable backend solutions and implementing AI-driven features that enhance user experiences and business outcomes.",
    "I thrive in international and remote team environments, bringing cross-cultural collaboration skills \
     and a global perspective to every project I undertake.",
];

// =============================================================================
// Blog
// =============================================================================

#[derive(Clone, Copy, Debug)]
pub struct Article {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
}

pub const ARTICLES: &[Article] = &[Article {
    title: "How I Used LLMs and LangChain to Understand Customer Emotions and Behaviors in Real-Time",
    description: "A comprehensive guide on implementing real-time customer sentiment analysis using Large Language \
                  Models and LangChain framework.",
    url: "https://medium.com/@mahmoodi.maryam1993/how-i-used-llms-and-langchain-to-understand-customer-emotions-and-behaviors-in-real-time-89c64bedd3d4",
    date: "2025",
    read_time: "5 min read",
    tags: &["LLM", "LangChain", "Sentiment Analysis", "Customer Analytics"],
    image: "LLMs and LangChain to Understand Customer Emotions and Behaviors in Real-Time.png",
}];

// =============================================================================
// Skills
// =============================================================================

#[derive(Clone, Copy, Debug)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory { title: "Languages", icon: "fas fa-code", skills: &["Python", "PHP", "SQL", "HTML/CSS"] },
    SkillCategory {
        title: "Frameworks",
        icon: "fas fa-layer-group",
        skills: &["Django", "Flask", "FastAPI", "Selenium", "Jinja2"],
    },
    SkillCategory {
        title: "AI/ML Libraries",
        icon: "fas fa-brain",
        skills: &["TensorFlow", "PyTorch", "HuggingFace", "Transformers", "LangChain", "OpenAI API"],
    },
    SkillCategory {
        title: "DevOps & Tools",
        icon: "fas fa-tools",
        skills: &["Docker", "Git", "Redis", "Linux", "Agile", "Testing"],
    },
    SkillCategory { title: "Databases", icon: "fas fa-database", skills: &["PostgreSQL", "MySQL", "SQLAlchemy", "Redis"] },
    SkillCategory {
        title: "APIs & Integration",
        icon: "fas fa-plug",
        skills: &["RESTful API", "FastAPI", "OpenAI API", "Third-party Integrations"],
    },
];

// =============================================================================
// Projects
// =============================================================================

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub features: &'static [&'static str],
    pub github: Option<&'static str>,
    pub demo: Option<&'static str>,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "AI-Powered Customer Chat Analyzer",
        description: "A modular and production-ready AI system for analyzing, summarizing, and classifying customer \
                      conversations using LangChain, HuggingFace Transformers, and Redis. It enables session-based \
                      summarization, sentiment analysis, and topic categorization with a simple web UI.",
        tech: &["Python", "LangChain", "OpenAI GPT", "HuggingFace Transformers", "FastAPI", "Redis", "HTML/CSS", "Jinja2"],
        features: &[
            "Summarizes customer chats using LangChain and OpenAI models",
            "Stores and manages chat sessions in Redis",
            "Performs sentiment analysis using fine-tuned HuggingFace models (positive, negative, neutral)",
            "Implements automatic topic classification (e.g., complaint, inquiry, purchase intent)",
            "RESTful API developed with FastAPI for integration and automation",
            "Minimal web UI with HTML/CSS and Jinja2 templates",
            "Modular architecture for easy maintenance and production deployment",
        ],
        github: Some("https://github.com/maryammahmoudi1993/ChatSummerizer"),
        demo: None,
        tags: &["AI", "LangChain", "NLP", "FastAPI", "Chat Analysis", "Redis", "Transformers", "Summarization"],
    },
    Project {
        title: "Neural Machine Translation (English ↔ Spanish)",
        description: "A sequence-to-sequence (Seq2Seq) machine translation system built with an encoder-decoder \
                      architecture for English to Spanish and vice versa translation.",
        tech: &["Python", "TensorFlow", "Seq2Seq", "LSTM", "Attention"],
        features: &[
            "Bi-directional translation (English ↔ Spanish)",
            "Encoder-Decoder architecture with attention mechanism",
            "Tokenization and preprocessing pipeline",
            "BLEU score evaluation for model performance",
            "Custom vocabulary and padding strategy",
        ],
        github: Some("https://github.com/maryammahmoudi1993/Translation-spanish-english"),
        demo: None,
        tags: &["NLP", "Seq2Seq", "Machine Translation", "Deep Learning", "TensorFlow"],
    },
    Project {
        title: "Object Detection Using Vision Transformers (ViT)",
        description: "Developed an object detection model using Vision Transformer (ViT) architecture for accurate \
                      recognition and localization in images.",
        tech: &["Python", "TensorFlow", "Vision Transformer (ViT)", "OpenCV"],
        features: &[
            "Image classification and object detection using ViT",
            "Pretrained model fine-tuning with custom datasets",
            "Visualization of bounding boxes and detection confidence",
            "TensorFlow-based training and evaluation pipeline",
        ],
        github: None,
        demo: None,
        tags: &["Computer Vision", "ViT", "Object Detection", "Transformers", "TensorFlow"],
    },
];

// =============================================================================
// Experience
// =============================================================================

#[derive(Clone, Copy, Debug)]
pub struct Role {
    pub role: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub achievements: &'static [&'static str],
}

pub const ROLES: &[Role] = &[
    Role {
        role: "Python Developer",
        company: "Inboxino",
        location: "Mashhad, Iran",
        period: "August 2024 - July 2025",
        achievements: &[
            "Developed automation tools and custom bots using Python",
            "Built and maintained backend services in PHP for scalable systems",
            "Contributed to business intelligence dashboards and reporting pipelines",
            "Collaborated across data and backend teams for system integration",
        ],
    },
    Role {
        role: "Data Scientist & BI Developer",
        company: "Hamta Rayaneh Research and Information Company",
        location: "Mashhad, Iran",
        period: "September 2021 - August 2024",
        achievements: &[
            "Implemented deep learning models with TensorFlow to handle large datasets (50K+ records)",
            "Reduced data processing time significantly through optimized pipelines",
            "Improved prediction model accuracy by 18% in internal forecasting projects",
            "Successfully deployed ML models in 3 commercial company projects",
        ],
    },
    Role {
        role: "AI Engineer (Computer Vision)",
        company: "Toos-Tech GmbH",
        location: "Cologne, Germany (Remote)",
        period: "March 2020 - February 2022",
        achievements: &[
            "Developed object detection models achieving 90% accuracy on a 1,000-image test set",
            "Used Transformer-based models (ViT) for enhanced real-time performance",
            "Reduced image processing runtime by 30% for real-time object recognition",
            "Contributed to building scalable pipelines for image analysis and deployment",
        ],
    },
];

// =============================================================================
// Education
// =============================================================================

#[derive(Clone, Copy, Debug)]
pub struct Degree {
    pub degree: &'static str,
    pub university: &'static str,
    pub period: &'static str,
    pub thesis: &'static str,
    pub gpa: &'static str,
}

pub const DEGREES: &[Degree] = &[
    Degree {
        degree: "Master of Science in Electrical Engineering – Telecommunications",
        university: "Ferdowsi University of Mashhad",
        period: "September 2016 – September 2021",
        thesis: "Osteoporosis Assessment Using Ultrasound Waves with Deep Learning",
        gpa: "17.17 / 20",
    },
    Degree {
        degree: "Bachelor of Science in Biomedical Engineering – Bioelectric",
        university: "Sajad University of Technology",
        period: "September 2011 – September 2015",
        thesis: "Epileptic Seizure Prediction with Neural Networks",
        gpa: "16 / 20",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Publication {
    pub title: &'static str,
    pub venue: &'static str,
    pub year: &'static str,
    pub doi: Option<&'static str>,
}

pub const PUBLICATIONS: &[Publication] = &[
    Publication {
        title: "Energy-aware Workflow Scheduling in Cloud Computing: DVFS-enabled under Deadline Constraint",
        venue: "29th International Conference on Power Distribution Networks (EPDC), IEEE",
        year: "2025",
        doi: None,
    },
    Publication {
        title: "A Demand Response Schema in Industry: Smart Scheduling Approach for Industrial Processes",
        venue: "15th International Conference on Information and Knowledge Technology (IKT), IEEE",
        year: "2024",
        doi: Some("https://ieeexplore.ieee.org/abstract/document/10892614"),
    },
    Publication {
        title: "Controlling Energy Consumption and Intelligent Manufacturing through an Energy-Aware Scheduling \
                Algorithm in Industrial Sector",
        venue: "32nd International Conference on Electrical Engineering (ICEE)",
        year: "2024",
        doi: Some("https://iceeconf.ir/home/Article/d35375f3-00ba-4b58-8fe3-77d0c01c59f2"),
    },
    Publication {
        title: "Understanding Charging and Power Dynamics in Electric Bus Fleets: A six-Month Case Study of Utah \
                Transit Authority",
        venue: "27th IEEE International Conference on Intelligent Transportation Systems (ITSC), Submitted",
        year: "2024",
        doi: None,
    },
];

pub const CERTIFICATES: &[&str] = &[
    "Scientific Poster Presentation Certificate – University of Isfahan & Iranian ICT Association (May 2025)",
    "Appreciation for Reviewing – 14th ICCKE Conference, Ferdowsi University of Mashhad (March 2025)",
    "Deep Learning with TensorFlow 2 – 365 Data Science (2022)",
    "Time Series Analysis with Python – 365 Data Science (2022)",
];

/// `(icon class, text)` rows under "Conference Activities".
pub const CONFERENCE_ACTIVITIES: &[(&str, &str)] = &[
    ("fas fa-user-check", "Peer Reviewer - IEEE Conferences"),
    ("fas fa-presentation", "Poster Presenter - ICEE 2020"),
    ("fas fa-gavel", "Technical Committee Member"),
];

// =============================================================================
// Contact and footer
// =============================================================================

#[derive(Clone, Copy, Debug)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub label: &'static str,
    pub text: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel { icon: "fas fa-envelope", label: "Email", text: EMAIL, href: Some(MAILTO) },
    ContactChannel { icon: "fab fa-linkedin", label: "LinkedIn", text: LINKEDIN_URL, href: Some(LINKEDIN_URL) },
    ContactChannel { icon: "fab fa-github", label: "GitHub", text: GITHUB_URL, href: Some(GITHUB_URL) },
    ContactChannel {
        icon: "fas fa-map-marker-alt",
        label: "Location",
        text: "Available for Remote Work Worldwide",
        href: None,
    },
];

/// `(icon class, href)` for the social icon rows.
pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("fab fa-linkedin", LINKEDIN_URL),
    ("fab fa-github", GITHUB_URL),
    ("fab fa-medium", MEDIUM_PROFILE_URL),
    ("fas fa-envelope", MAILTO),
];

pub const CONTACT_DEMO_NOTE: &str = "This is a demo form. In production, messages would be sent via email.";

pub const FOOTER_BLURB: &str = "AI-Powered Backend Developer & Data Scientist passionate about creating \
     intelligent solutions that make a difference.";

/// Sections reachable from the footer's quick links.
pub const FOOTER_LINKS: &[SectionId] = &[
    SectionId::About,
    SectionId::Skills,
    SectionId::Work,
    SectionId::History,
    SectionId::Reach,
];

pub const SPECIALIZATIONS: &[&str] = &[
    "Machine Learning & AI",
    "Backend Development",
    "Data Science & Analytics",
    "Natural Language Processing",
    "API Development",
];

pub const COPYRIGHT: &str = "© 2024 Maryam Mahmoudi. All rights reserved.";
