//! Built-in sample courses, used to seed an empty catalog and as the fallback
//! when the catalog cannot be read.

use crate::engine::roadmap::Difficulty;
use crate::models::course::Course;

struct SampleCourse {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    benefit: &'static str,
    hours_per_week: i32,
    duration: &'static str,
    level: Difficulty,
    category: &'static str,
    skills: &'static [&'static str],
    instructor: &'static str,
    rating: f64,
    students_enrolled: i32,
    price: i32,
    tags: &'static [&'static str],
}

const SAMPLES: [SampleCourse; 8] = [
    SampleCourse {
        id: "1",
        title: "Modern React Development",
        description: "Master React 18 with hooks, context, and modern patterns. Build scalable applications with best practices.",
        benefit: "Build production-ready React applications and advance your frontend career",
        hours_per_week: 8,
        duration: "12 weeks",
        level: Difficulty::Intermediate,
        category: "Frontend Development",
        skills: &["React", "JavaScript", "TypeScript", "Next.js"],
        instructor: "Sarah Chen",
        rating: 4.8,
        students_enrolled: 2847,
        price: 149,
        tags: &["Popular", "Career Boost"],
    },
    SampleCourse {
        id: "2",
        title: "Python for Data Science",
        description: "Learn Python programming for data analysis, visualization, and machine learning applications.",
        benefit: "Transition into high-demand data science roles with practical Python skills",
        hours_per_week: 10,
        duration: "16 weeks",
        level: Difficulty::Beginner,
        category: "Data Science",
        skills: &["Python", "Pandas", "NumPy", "Matplotlib", "Machine Learning"],
        instructor: "Dr. Michael Rodriguez",
        rating: 4.9,
        students_enrolled: 3521,
        price: 199,
        tags: &["Bestseller", "Career Change"],
    },
    SampleCourse {
        id: "3",
        title: "Full-Stack JavaScript",
        description: "Complete web development with Node.js, Express, MongoDB, and React. Build end-to-end applications.",
        benefit: "Become a versatile full-stack developer capable of building complete web applications",
        hours_per_week: 12,
        duration: "20 weeks",
        level: Difficulty::Intermediate,
        category: "Full-Stack Development",
        skills: &["JavaScript", "Node.js", "React", "MongoDB", "Express.js"],
        instructor: "Alex Thompson",
        rating: 4.7,
        students_enrolled: 1923,
        price: 249,
        tags: &["Comprehensive", "Project-Based"],
    },
    SampleCourse {
        id: "4",
        title: "UI/UX Design Fundamentals",
        description: "Learn design principles, user research, prototyping, and modern design tools like Figma.",
        benefit: "Create beautiful, user-centered designs and launch your design career",
        hours_per_week: 6,
        duration: "10 weeks",
        level: Difficulty::Beginner,
        category: "Design",
        skills: &["UI/UX Design", "Figma", "User Research", "Prototyping"],
        instructor: "Emma Wilson",
        rating: 4.6,
        students_enrolled: 1456,
        price: 129,
        tags: &["Creative", "Portfolio Building"],
    },
    SampleCourse {
        id: "5",
        title: "Cloud Architecture with AWS",
        description: "Master AWS services, serverless architecture, and cloud deployment strategies for scalable applications.",
        benefit: "Become a cloud architect and command higher salaries in the growing cloud market",
        hours_per_week: 8,
        duration: "14 weeks",
        level: Difficulty::Advanced,
        category: "Cloud Computing",
        skills: &["AWS", "Docker", "Kubernetes", "Serverless", "DevOps"],
        instructor: "James Park",
        rating: 4.8,
        students_enrolled: 987,
        price: 299,
        tags: &["High Salary", "Enterprise"],
    },
    SampleCourse {
        id: "6",
        title: "Machine Learning Fundamentals",
        description: "Introduction to ML algorithms, supervised and unsupervised learning, and practical implementations.",
        benefit: "Enter the AI field with solid ML foundations and practical project experience",
        hours_per_week: 10,
        duration: "18 weeks",
        level: Difficulty::Intermediate,
        category: "Machine Learning",
        skills: &["Python", "Machine Learning", "TensorFlow", "Scikit-learn"],
        instructor: "Dr. Lisa Zhang",
        rating: 4.9,
        students_enrolled: 2134,
        price: 279,
        tags: &["AI/ML", "Future Skills"],
    },
    SampleCourse {
        id: "7",
        title: "Mobile App Development",
        description: "Build native mobile apps for iOS and Android using React Native and modern development practices.",
        benefit: "Develop mobile apps and tap into the growing mobile-first market",
        hours_per_week: 9,
        duration: "16 weeks",
        level: Difficulty::Intermediate,
        category: "Mobile Development",
        skills: &["React Native", "JavaScript", "Mobile UI", "App Store"],
        instructor: "Carlos Martinez",
        rating: 4.5,
        students_enrolled: 1678,
        price: 189,
        tags: &["Mobile", "Cross-Platform"],
    },
    SampleCourse {
        id: "8",
        title: "Cybersecurity Essentials",
        description: "Learn security fundamentals, ethical hacking, and how to protect systems from cyber threats.",
        benefit: "Start a lucrative cybersecurity career in one of the fastest-growing tech fields",
        hours_per_week: 7,
        duration: "12 weeks",
        level: Difficulty::Beginner,
        category: "Cybersecurity",
        skills: &["Network Security", "Ethical Hacking", "Risk Assessment", "Compliance"],
        instructor: "Robert Kim",
        rating: 4.7,
        students_enrolled: 1234,
        price: 219,
        tags: &["High Demand", "Security"],
    },
];

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn sample_courses() -> Vec<Course> {
    SAMPLES
        .iter()
        .map(|c| Course {
            id: c.id.to_string(),
            title: c.title.to_string(),
            description: c.description.to_string(),
            benefit: c.benefit.to_string(),
            hours_per_week: c.hours_per_week,
            duration: c.duration.to_string(),
            level: c.level,
            category: c.category.to_string(),
            skills: owned(c.skills),
            instructor: c.instructor.to_string(),
            rating: c.rating,
            students_enrolled: c.students_enrolled,
            price: c.price,
            image_url: None,
            tags: owned(c.tags),
        })
        .collect()
}
