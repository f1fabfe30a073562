//! Public landing page.

use leptos::prelude::*;

use crate::components::header::Header;

/// Marketing portal: product pitch plus the purchase call-to-action. Fully
/// static apart from the header's session-driven menu.
#[component]
pub fn PortalPage() -> impl IntoView {
    view! {
        <div class="portal-page">
            <Header/>
            <main class="portal-main">
                <section class="hero">
                    <h1 class="hero-title">"BulC"</h1>
                    <p class="hero-subtitle">
                        "건물 화재 시뮬레이션, 설계 단계에서 미리 확인하세요."
                    </p>
                    <a href="/payment" class="hero-cta">"라이선스 구매"</a>
                </section>
                <section class="features">
                    <div class="feature-card">
                        <h3>"정밀한 화염 전파 해석"</h3>
                        <p>"CFD 기반 엔진이 실제 건물 도면 위에서 화염과 연기의 확산을 재현합니다."</p>
                    </div>
                    <div class="feature-card">
                        <h3>"피난 경로 검증"</h3>
                        <p>"시뮬레이션 결과로 대피 동선과 소요 시간을 정량적으로 평가합니다."</p>
                    </div>
                    <div class="feature-card">
                        <h3>"보고서 자동 생성"</h3>
                        <p>"성능위주설계 심의에 바로 쓸 수 있는 해석 보고서를 생성합니다."</p>
                    </div>
                </section>
            </main>
            <footer class="portal-footer">
                <p>"© BulC. All rights reserved."</p>
            </footer>
        </div>
    }
}
