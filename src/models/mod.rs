pub mod attendance;
pub mod course;
pub mod department;
pub mod enrollment;
pub mod entity;
pub mod instructor;
pub mod schedule;
pub mod section;
pub mod student;

pub use attendance::{Attendance, AttendanceStatus};
pub use course::{Course, CourseDraft};
pub use department::{Department, DepartmentDraft};
pub use enrollment::{Enrollment, EnrollmentStatus};
pub use entity::{Draftable, Entity, EntityKind, FieldValue, Meta, capitalize};
pub use instructor::{Instructor, InstructorDraft};
pub use schedule::{DayOfWeek, Recurrence, Schedule};
pub use section::{Section, SectionDraft};
pub use student::{Student, StudentDraft};
