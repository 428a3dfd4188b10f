//! Static seed data and id lookups over it.
//!
//! Pages copy their initial list from here and resolve foreign keys against
//! it. It is never mutated, so a label shown on one page does not change when
//! another page deletes the record it came from.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    Attendance, AttendanceStatus, Course, DayOfWeek, Department, Enrollment, EnrollmentStatus,
    Entity, Instructor, Meta, Recurrence, Schedule, Section, Student,
};

/// Records of one kind with an index by id.
#[derive(Debug, Clone)]
pub struct Lookup<T> {
    rows: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Entity> Lookup<T> {
    pub fn new(rows: Vec<T>) -> Self {
        let index = rows
            .iter()
            .enumerate()
            .map(|(position, row)| (row.id().to_string(), position))
            .collect();
        Self { rows, index }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&position| &self.rows[position])
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }
}

#[derive(Debug, Clone)]
pub struct Fixtures {
    pub departments: Lookup<Department>,
    pub instructors: Lookup<Instructor>,
    pub courses: Lookup<Course>,
    pub sections: Lookup<Section>,
    pub students: Lookup<Student>,
    pub enrollments: Lookup<Enrollment>,
    pub attendances: Lookup<Attendance>,
    pub schedules: Lookup<Schedule>,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    date(year, month, day)
        .and_hms_opt(0, 0, 0)
        .map(|moment| moment.and_utc())
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

impl Fixtures {
    /// Seed set; `now` stamps every record's last update.
    pub fn seed(now: DateTime<Utc>) -> Self {
        let meta = |id: &str, created: DateTime<Utc>| Meta::seeded(id, created, now);

        let departments = vec![
            Department {
                meta: meta("d1", at(2020, 1, 15)),
                name: "Computer Science".to_string(),
                code: "CS".to_string(),
                head_instructor_id: None,
                description: some("Department of Computer Science and Engineering"),
            },
            Department {
                meta: meta("d2", at(2020, 1, 15)),
                name: "Mathematics".to_string(),
                code: "MATH".to_string(),
                head_instructor_id: None,
                description: some("Department of Mathematics and Statistics"),
            },
            Department {
                meta: meta("d3", at(2020, 1, 15)),
                name: "Physics".to_string(),
                code: "PHYS".to_string(),
                head_instructor_id: None,
                description: some("Department of Physics and Astronomy"),
            },
        ];

        let instructor = |id: &str, created, name: &str, email: &str, phone: &str, dept: &str, title: &str| {
            Instructor {
                meta: meta(id, created),
                name: name.to_string(),
                email: email.to_string(),
                phone: some(phone),
                department_id: dept.to_string(),
                title: some(title),
            }
        };
        let instructors = vec![
            instructor("i1", at(2020, 2, 10), "Dr. Alan Turing", "turing@university.edu", "555-123-4567", "d1", "Professor"),
            instructor("i2", at(2020, 3, 15), "Dr. Grace Hopper", "hopper@university.edu", "555-765-4321", "d1", "Associate Professor"),
            instructor("i3", at(2020, 4, 20), "Dr. Isaac Newton", "newton@university.edu", "555-987-6543", "d2", "Professor"),
        ];

        let course = |id: &str, created, name: &str, code: &str, credits, dept: &str, description: &str| Course {
            meta: meta(id, created),
            name: name.to_string(),
            code: code.to_string(),
            credits,
            department_id: dept.to_string(),
            description: some(description),
        };
        let courses = vec![
            course("c1", at(2020, 5, 5), "Introduction to Computer Science", "CS101", 3, "d1",
                "Fundamentals of computer programming and problem solving"),
            course("c2", at(2020, 5, 10), "Data Structures and Algorithms", "CS201", 4, "d1",
                "Study of data structures and algorithms for solving computational problems"),
            course("c3", at(2020, 5, 15), "Calculus I", "MATH101", 4, "d2",
                "Introduction to differential and integral calculus"),
        ];

        let section = |id: &str, created, course: &str, instructor: &str, room: &str, max_students, number: &str| Section {
            meta: meta(id, created),
            course_id: course.to_string(),
            instructor_id: instructor.to_string(),
            room_number: some(room),
            max_students,
            semester: "Fall".to_string(),
            year: 2023,
            section_number: number.to_string(),
        };
        let sections = vec![
            section("s1", at(2023, 7, 15), "c1", "i1", "CS-101", 30, "001"),
            section("s2", at(2023, 7, 20), "c1", "i2", "CS-102", 25, "002"),
            section("s3", at(2023, 7, 25), "c3", "i3", "MATH-201", 35, "001"),
        ];

        let student = |id: &str, created, name: &str, email: &str, number: &str, born, phone: &str, address: &str| Student {
            meta: meta(id, created),
            name: name.to_string(),
            email: email.to_string(),
            student_id: number.to_string(),
            date_of_birth: Some(born),
            phone: some(phone),
            address: some(address),
        };
        let students = vec![
            student("st1", at(2023, 8, 1), "John Doe", "john@university.edu", "20230001",
                date(2000, 6, 15), "555-111-2222", "123 Campus Drive"),
            student("st2", at(2023, 8, 2), "Jane Smith", "jane@university.edu", "20230002",
                date(2001, 3, 22), "555-333-4444", "456 University Ave"),
            student("st3", at(2023, 8, 3), "Michael Johnson", "michael@university.edu", "20230003",
                date(2000, 12, 7), "555-555-6666", "789 College Blvd"),
        ];

        let enrollment = |id: &str, student: &str, section: &str, day: u32| Enrollment {
            meta: meta(id, at(2023, 8, day)),
            student_id: student.to_string(),
            section_id: section.to_string(),
            enrollment_date: date(2023, 8, day),
            grade: None,
            status: EnrollmentStatus::Active,
        };
        let enrollments = vec![
            enrollment("e1", "st1", "s1", 10),
            enrollment("e2", "st2", "s1", 11),
            enrollment("e3", "st3", "s2", 12),
        ];

        let attendance = |id: &str, enrollment: &str, day: u32, status, notes: Option<String>| Attendance {
            meta: meta(id, at(2023, 9, day)),
            enrollment_id: enrollment.to_string(),
            date: date(2023, 9, day),
            status,
            notes,
        };
        let attendances = vec![
            attendance("a1", "e1", 5, AttendanceStatus::Present, None),
            attendance("a2", "e2", 5, AttendanceStatus::Present, None),
            attendance("a3", "e3", 6, AttendanceStatus::Absent, some("Student reported sick")),
        ];

        let schedule = |id: &str, day: u32, section: &str, weekday, start: &str, end: &str, room: &str| Schedule {
            meta: meta(id, at(2023, 8, day)),
            section_id: section.to_string(),
            day_of_week: weekday,
            start_time: start.to_string(),
            end_time: end.to_string(),
            recurrence: Recurrence::Weekly,
            location: some(room),
        };
        let schedules = vec![
            schedule("sc1", 20, "s1", DayOfWeek::Monday, "09:00", "10:30", "CS-101"),
            schedule("sc2", 20, "s1", DayOfWeek::Wednesday, "09:00", "10:30", "CS-101"),
            schedule("sc3", 21, "s2", DayOfWeek::Tuesday, "13:00", "14:30", "CS-102"),
        ];

        Self {
            departments: Lookup::new(departments),
            instructors: Lookup::new(instructors),
            courses: Lookup::new(courses),
            sections: Lookup::new(sections),
            students: Lookup::new(students),
            enrollments: Lookup::new(enrollments),
            attendances: Lookup::new(attendances),
            schedules: Lookup::new(schedules),
        }
    }

    pub fn department(&self, id: &str) -> Option<&Department> {
        self.departments.get(id)
    }

    pub fn instructor(&self, id: &str) -> Option<&Instructor> {
        self.instructors.get(id)
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.get(id)
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.get(id)
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    pub fn enrollment(&self, id: &str) -> Option<&Enrollment> {
        self.enrollments.get(id)
    }

    /// The course a section teaches.
    pub fn course_of_section(&self, section_id: &str) -> Option<(&Section, &Course)> {
        let section = self.section(section_id)?;
        let course = self.course(&section.course_id)?;
        Some((section, course))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> Fixtures {
        Fixtures::seed(at(2024, 1, 1))
    }

    #[test]
    fn three_of_each() {
        let f = fixtures();
        assert_eq!(f.departments.rows().len(), 3);
        assert_eq!(f.instructors.rows().len(), 3);
        assert_eq!(f.courses.rows().len(), 3);
        assert_eq!(f.sections.rows().len(), 3);
        assert_eq!(f.students.rows().len(), 3);
        assert_eq!(f.enrollments.rows().len(), 3);
        assert_eq!(f.attendances.rows().len(), 3);
        assert_eq!(f.schedules.rows().len(), 3);
    }

    #[test]
    fn lookups_by_id() {
        let f = fixtures();
        assert_eq!(f.department("d2").map(|d| d.code.as_str()), Some("MATH"));
        assert_eq!(f.instructor("i3").map(|i| i.name.as_str()), Some("Dr. Isaac Newton"));
        assert!(f.student("st9").is_none());

        let (section, course) = f.course_of_section("s3").unwrap();
        assert_eq!(section.section_number, "001");
        assert_eq!(course.code, "MATH101");
    }

    #[test]
    fn seed_stamps_updates_with_now() {
        let f = fixtures();
        let dept = f.department("d1").unwrap();
        assert_eq!(dept.meta.created_at, at(2020, 1, 15));
        assert_eq!(dept.meta.updated_at, at(2024, 1, 1));
    }
}
