pub mod a001_staff_member;
pub mod a002_achievement;
pub mod a003_partner;
pub mod a004_faq;
pub mod a005_course;
pub mod a006_bus_route;
pub mod a007_payment_plan;
pub mod a008_club;
pub mod a009_policy;
