use crate::layout::Shell;
use crate::pages::about::AboutPage;
use crate::pages::academics::AcademicsPage;
use crate::pages::admissions::AdmissionsPage;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::partners::PartnersPage;
use crate::pages::policies::PoliciesPage;
use crate::pages::staff::StaffPage;
use crate::pages::student_life::StudentLifePage;
use crate::pages::transport::TransportPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Client routes. Paths mirror `contracts::site::routes::SITE_ROUTES`, which the
/// backend also uses to answer deep links with `index.html`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/staff") view=StaffPage />
                    <Route path=path!("/partners") view=PartnersPage />
                    <Route path=path!("/policies") view=PoliciesPage />
                    <Route path=path!("/academics") view=AcademicsPage />
                    <Route path=path!("/student-life") view=StudentLifePage />
                    <Route path=path!("/admissions") view=AdmissionsPage />
                    <Route path=path!("/transport") view=TransportPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </Shell>
        </Router>
    }
}
