//! Dashboard Page
//!
//! Tables section above charts section. The containers hold no state and
//! fetch nothing themselves.

use leptos::*;

use crate::components::{AttendantsTable, BarChart, ClientsTable, PieChart};

#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <TablesSection />
            <ChartsSection />
        </div>
    }
}

/// Attendants and clients rankings side by side
#[component]
pub fn TablesSection() -> impl IntoView {
    view! {
        <section class="grid md:grid-cols-2 gap-6">
            <div>
                <h2 class="text-lg font-semibold mb-3">"Atendentes"</h2>
                <AttendantsTable />
            </div>
            <div>
                <h2 class="text-lg font-semibold mb-3">"Clientes"</h2>
                <ClientsTable />
            </div>
        </section>
    }
}

#[component]
pub fn ChartsSection() -> impl IntoView {
    view! {
        <section class="grid md:grid-cols-2 gap-6">
            <div>
                <h2 class="text-lg font-semibold mb-3">"Performance Geral"</h2>
                <PieChart />
            </div>
            <div>
                <h2 class="text-lg font-semibold mb-3">"Evolução Mensal"</h2>
                <BarChart />
            </div>
        </section>
    }
}
